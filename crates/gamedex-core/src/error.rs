use crate::entry::EntryId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("entry with id {0} already exists")]
    DuplicateId(EntryId),
    #[error("price must be strictly positive, got {0}")]
    InvalidPrice(i64),
    #[error("entry must have at least one genre")]
    EmptyGenres,
}
