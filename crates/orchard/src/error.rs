//! Error types for orchard.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("capitalize: not a string")]
    NotAString,

    #[error("sampleItem: not an array")]
    NotAnArray,

    #[error("sampleItem: empty array")]
    EmptyArray,

    /// A requester failure, flattened to its display form.
    #[error("fetchFruit: {0}")]
    Fetch(String),
}

impl Error {
    /// Wrap any displayable failure as a fetch error.
    pub fn fetch(source: impl std::fmt::Display) -> Self { Error::Fetch(source.to_string()) }
}

pub type Result<T> = std::result::Result<T, Error>;
