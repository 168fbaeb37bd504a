//! Bookshelf Interactive Shell
//!
//! Menu-driven front-end over a single catalog.

use std::io::{self, IsTerminal};

use bookshelf::shell::Session;
use bookshelf::{Catalog, Config};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Bookshelf interactive shell
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(about = "Menu-driven catalog for a small book collection")]
#[command(version)]
struct Args {
    /// Data file used by Save and Load
    #[arg(short, long, default_value = "library_books.txt")]
    file: String,

    /// Disable coloured messages
    #[arg(long)]
    no_color: bool,
}

fn main() {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Bookshelf v{}", bookshelf::VERSION);
    tracing::info!("Data file: {}", args.file);

    let config = Config::builder().data_file(&args.file).build();

    let catalog = match Catalog::new(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            std::process::exit(1);
        }
    };

    let use_color = !args.no_color && io::stdout().is_terminal();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(catalog, stdin.lock(), stdout.lock()).with_color(use_color);

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
