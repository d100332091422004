use crate::entry::{Entry, EntryId};
use std::collections::HashMap;

/// Genre name to entry ids, in registration order. Genre matching is exact
/// and case-sensitive; no normalization is applied.
pub struct GenreIndex {
    by_genre: HashMap<String, Vec<EntryId>>,
}

impl GenreIndex {
    pub fn new() -> Self {
        GenreIndex {
            by_genre: HashMap::new(),
        }
    }

    /// Appends the entry's id under each of its genres. A genre repeated
    /// within one entry's list appends the id twice; de-duplication is the
    /// caller's concern.
    pub fn add(&mut self, entry: &Entry) {
        for genre in &entry.genres {
            self.by_genre.entry(genre.clone()).or_default().push(entry.id);
        }
    }

    pub fn lookup(&self, genre: &str) -> &[EntryId] {
        self.by_genre.get(genre).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn genre_count(&self) -> usize {
        self.by_genre.len()
    }
}

impl Default for GenreIndex {
    fn default() -> Self {
        Self::new()
    }
}
