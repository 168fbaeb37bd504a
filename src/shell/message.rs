//! User-facing messages
//!
//! Each message carries a level so the terminal can colour it.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    /// Message text, coloured by level when `color` is set
    pub fn paint(&self, color: bool) -> String {
        if !color {
            return self.content.clone();
        }
        match self.level {
            MessageLevel::Info => self.content.dimmed().to_string(),
            MessageLevel::Success => self.content.green().to_string(),
            MessageLevel::Warning => self.content.yellow().to_string(),
            MessageLevel::Error => self.content.red().to_string(),
        }
    }
}
