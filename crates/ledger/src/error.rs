//! Ledger Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction. Store failures keep the store's own
//! `Exn` as a child of [`ErrorKind::Store`].

use crate::history::Action;
use derive_more::{Display, Error};
use shelf_models::BookTitle;

/// A ledger error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The engine operation that was being attempted.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    #[display("borrow")]
    Borrow,
    #[display("return")]
    Return,
    #[display("undo")]
    Undo,
}

/// Why an engine operation was refused or failed.
///
/// ### Rejections (no state changed)
/// - [`ErrorKind::EmptyTitle`]
/// - [`ErrorKind::Unavailable`]
/// - [`ErrorKind::NotBorrowed`]
/// - [`ErrorKind::NothingToUndo`]
/// - [`ErrorKind::UndoMismatch`] - the stale entry itself is consumed.
///
/// ### Faults
/// - [`ErrorKind::Store`]
/// - [`ErrorKind::Load`]
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The title was blank after trimming.
    #[display("cannot {_0} a book without a name")]
    EmptyTitle(#[error(not(source))] Operation),
    /// Borrowing a book that is already lent out.
    #[display("'{_0}' is already borrowed")]
    Unavailable(#[error(not(source))] BookTitle),
    /// Returning a book that isn't currently lent out.
    #[display("'{_0}' is not marked as borrowed")]
    NotBorrowed(#[error(not(source))] BookTitle),
    #[display("no actions to undo")]
    NothingToUndo,
    /// The most recent action no longer matches the ledger; it was dropped
    /// without changing anything.
    #[display("cannot undo {_0}: the ledger has changed since")]
    UndoMismatch(#[error(not(source))] Action),
    /// Persisting the change failed; the in-memory ledger was left untouched.
    #[display("could not persist {operation} of '{title}'")]
    Store { operation: Operation, title: BookTitle },
    /// Reading the persisted records at startup failed.
    #[display("could not load book records")]
    Load,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store { .. } | Self::Load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(raw: &str) -> BookTitle {
        BookTitle::new(raw).unwrap()
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::EmptyTitle(Operation::Return).to_string(), "cannot return a book without a name");
        assert_eq!(ErrorKind::Unavailable(title("dune")).to_string(), "'Dune' is already borrowed");
        assert_eq!(ErrorKind::NotBorrowed(title("dune")).to_string(), "'Dune' is not marked as borrowed");
        assert_eq!(
            ErrorKind::Store {
                operation: Operation::Borrow,
                title: title("emma")
            }
            .to_string(),
            "could not persist borrow of 'Emma'"
        );
        assert_eq!(
            ErrorKind::UndoMismatch(Action::Return(title("dune"))).to_string(),
            "cannot undo return of 'Dune': the ledger has changed since"
        );
    }

    #[test]
    fn error_kind_retryable() {
        assert!(!ErrorKind::NothingToUndo.is_retryable());
        assert!(!ErrorKind::Unavailable(title("dune")).is_retryable());
        assert!(ErrorKind::Load.is_retryable());
    }
}
