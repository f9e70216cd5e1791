use thiserror::Error;

/// Unified error type for the composite iterator and its sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source collection, or one of its sources, is absent.
    /// Raised eagerly at construction.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A source is not strictly ascending, or an element appears twice
    /// (within one source or across two). Raised lazily when reached.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// `next` was called with no elements left.
    #[error("No more elements")]
    Exhausted,
    /// `remove` was called without an immediately preceding `next`.
    #[error("Illegal state: {0}")]
    IllegalState(&'static str),
    /// The source cannot perform the requested operation.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl Error {
    /// True for the lazily detected ordering/uniqueness violations.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
