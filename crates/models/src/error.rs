//! Model Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A model error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for model construction and parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The title was empty once surrounding whitespace was removed.
    #[display("book title is empty")]
    EmptyTitle,
    /// A status string that is neither "Borrowed" nor "Available".
    #[display("invalid book status: {_0}")]
    InvalidStatus(#[error(not(source))] String),
    /// A stored name that normalizing would change.
    #[display("book title is not in canonical form: {_0:?}")]
    NotNormalized(#[error(not(source))] String),
}
