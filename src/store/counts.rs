//! Genre tally
//!
//! Insertion-ordered genre → count mapping. Catalogs hold a handful of
//! genres, so lookups are a linear scan over the keys.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Count of records per genre, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreCounts {
    entries: Vec<(String, usize)>,
}

impl GenreCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `genre`, inserting it at the end if unseen
    pub fn increment(&mut self, genre: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == genre) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((genre.to_string(), 1)),
        }
    }

    /// Count for `genre`, if it occurs
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _)| name == genre)
            .map(|(_, count)| *count)
    }

    /// Genres and counts in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Number of distinct genres
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object; keys keep first-occurrence order.
impl Serialize for GenreCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}
