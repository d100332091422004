use serde::{Deserialize, Serialize};
use std::fmt;

pub type EntryId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub developer: String,
    pub price: i64,
    pub genres: Vec<String>,
}

impl Entry {
    pub fn new(
        id: EntryId,
        title: impl Into<String>,
        developer: impl Into<String>,
        price: i64,
        genres: Vec<String>,
    ) -> Self {
        Entry {
            id,
            title: title.into(),
            developer: developer.into(),
            price,
            genres,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Developer: {} | Price: {} | Genres: {}",
            self.id,
            self.title,
            self.developer,
            self.price,
            self.genres.join(", ")
        )
    }
}
