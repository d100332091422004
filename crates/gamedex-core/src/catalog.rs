use crate::entry::{Entry, EntryId};
use crate::error::{Error, Result};
use crate::genre_index::GenreIndex;
use crate::price_index::PriceIndex;
use std::collections::HashMap;
use tracing::debug;

/// In-memory catalog of game entries. The id map is the single source of
/// truth for entry data; the price tree and the genre index hold ids only.
pub struct Catalog {
    entries: HashMap<EntryId, Entry>,
    by_price: PriceIndex,
    by_genre: GenreIndex,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            entries: HashMap::new(),
            by_price: PriceIndex::new(),
            by_genre: GenreIndex::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn genre_count(&self) -> usize {
        self.by_genre.genre_count()
    }

    /// Id to assign to the next registered entry.
    pub fn next_id(&self) -> EntryId {
        self.entries.len() as EntryId + 1
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Registers an entry in all three structures. All validation happens
    /// before any mutation, so a rejection leaves the catalog untouched.
    pub fn register(&mut self, entry: Entry) -> Result<()> {
        if self.entries.contains_key(&entry.id) {
            return Err(Error::DuplicateId(entry.id));
        }
        if entry.price <= 0 {
            return Err(Error::InvalidPrice(entry.price));
        }
        if entry.genres.is_empty() {
            return Err(Error::EmptyGenres);
        }

        debug!(id = entry.id, price = entry.price, title = %entry.title, "registering entry");

        self.by_price.insert(entry.price, entry.id);
        self.by_genre.add(&entry);
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    /// Entries priced exactly `price`, in insertion order.
    pub fn find_by_price(&self, price: i64) -> Vec<&Entry> {
        self.resolve(self.by_price.search_exact(price))
    }

    /// Entries with `min <= price <= max`, ascending by price, ties in
    /// insertion order.
    pub fn find_by_price_range(&self, min: i64, max: i64) -> Vec<&Entry> {
        self.resolve(&self.by_price.search_range(min, max))
    }

    /// Entries carrying the given genre, in registration order. Exact,
    /// case-sensitive match on the genre name.
    pub fn find_by_genre(&self, genre: &str) -> Vec<&Entry> {
        self.resolve(self.by_genre.lookup(genre))
    }

    /// All entries ascending by price, ties in insertion order.
    pub fn list_by_price_ascending(&self) -> Vec<&Entry> {
        self.resolve(&self.by_price.in_order())
    }

    // Ids not present in the map are skipped. Cannot happen today since
    // nothing is ever deleted, but lookups must not panic on a stale index.
    fn resolve(&self, ids: &[EntryId]) -> Vec<&Entry> {
        ids.iter().filter_map(|id| self.entries.get(id)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
