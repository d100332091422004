pub mod catalog;
pub mod entry;
pub mod error;
pub mod genre_index;
pub mod price_index;

pub use catalog::Catalog;
pub use entry::{Entry, EntryId};
pub use error::{Error, Result};
pub use genre_index::GenreIndex;
pub use price_index::PriceIndex;
