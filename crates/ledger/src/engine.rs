//! Borrow/return engine.
//!
//! Validates transitions, writes them through to the store and only then
//! updates the ledger and history. A failed store write leaves memory exactly
//! as it was.

use crate::error::{ErrorKind, Operation, Result};
use crate::history::{Action, History};
use crate::ledger::{Ledger, ReturnedHistory};
use crate::sort::sorted_view;
use derive_more::Display;
use exn::ResultExt;
use shelf_models::{BookStatus, BookTitle};
use shelf_store::StoreHandle;
use tracing::instrument;

/// A successfully applied change.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Outcome {
    #[display("'{_0}' has been borrowed.")]
    Borrowed(BookTitle),
    #[display("'{_0}' has been returned.")]
    Returned(BookTitle),
    #[display("Undid borrowing of '{_0}'.")]
    UndoneBorrow(BookTitle),
    #[display("Undid return of '{_0}'.")]
    UndoneReturn(BookTitle),
}
impl Outcome {
    pub fn title(&self) -> &BookTitle {
        match self {
            Outcome::Borrowed(t) | Outcome::Returned(t) | Outcome::UndoneBorrow(t) | Outcome::UndoneReturn(t) => t,
        }
    }
}

/// The application state: ledger, undo history and the store they mirror.
///
/// Operations take `&mut self`, so only one can ever be in flight.
pub struct Engine {
    store: StoreHandle,
    ledger: Ledger,
    history: History,
}

impl Engine {
    /// Build the ledger from everything the store knows. History starts
    /// empty.
    #[instrument(skip(store), fields(backend = store.name()))]
    pub async fn open(store: StoreHandle, returned_history: ReturnedHistory) -> Result<Self> {
        let records = store.load().await.or_raise(|| ErrorKind::Load)?;
        let ledger = Ledger::from_records(records, returned_history);
        tracing::info!(books = ledger.len(), borrowed = ledger.borrowed().len(), "ledger loaded");
        Ok(Self {
            store,
            ledger,
            history: History::new(),
        })
    }

    fn title(raw: &str, operation: Operation) -> Result<BookTitle> {
        BookTitle::new(raw).or_raise(|| ErrorKind::EmptyTitle(operation))
    }

    /// Lend out a book. Unknown titles are recorded on first borrow.
    #[instrument(skip(self))]
    pub async fn borrow(&mut self, raw: &str) -> Result<Outcome> {
        let title = Self::title(raw, Operation::Borrow)?;
        if self.ledger.is_borrowed(&title) {
            exn::bail!(ErrorKind::Unavailable(title));
        }
        self.store.upsert(&title, BookStatus::Borrowed).await.or_raise(|| ErrorKind::Store {
            operation: Operation::Borrow,
            title: title.clone(),
        })?;
        self.ledger.mark_borrowed(&title);
        self.history.push(Action::Borrow(title.clone()));
        tracing::debug!(%title, "borrowed");
        Ok(Outcome::Borrowed(title))
    }

    /// Take back a book that is currently lent out.
    #[instrument(skip(self))]
    pub async fn return_book(&mut self, raw: &str) -> Result<Outcome> {
        let title = Self::title(raw, Operation::Return)?;
        if !self.ledger.is_borrowed(&title) {
            exn::bail!(ErrorKind::NotBorrowed(title));
        }
        self.store.upsert(&title, BookStatus::Available).await.or_raise(|| ErrorKind::Store {
            operation: Operation::Return,
            title: title.clone(),
        })?;
        self.ledger.mark_returned(&title);
        self.history.push(Action::Return(title.clone()));
        tracing::debug!(%title, "returned");
        Ok(Outcome::Returned(title))
    }

    /// Revert the most recent borrow or return.
    ///
    /// Undoing a borrow forgets the title completely. Undoing a return puts
    /// the book back on loan. An entry that no longer matches the ledger is
    /// discarded and reported as [`ErrorKind::UndoMismatch`]. If the store
    /// write fails the entry stays on the history, so the undo can be retried.
    #[instrument(skip(self))]
    pub async fn undo(&mut self) -> Result<Outcome> {
        let Some(action) = self.history.pop_last() else {
            exn::bail!(ErrorKind::NothingToUndo);
        };
        let written = match &action {
            Action::Borrow(title) if self.ledger.in_borrowed_list(title) => self.store.delete(title).await,
            Action::Return(title) if self.ledger.in_returned_list(title) => {
                self.store.upsert(title, BookStatus::Borrowed).await
            },
            stale => {
                tracing::warn!(action = %stale, "undo entry no longer matches the ledger; dropped");
                exn::bail!(ErrorKind::UndoMismatch(stale.clone()));
            },
        };
        if let Err(err) = written {
            let title = action.title().clone();
            self.history.push(action);
            return Err(err).or_raise(|| ErrorKind::Store {
                operation: Operation::Undo,
                title,
            });
        }
        let outcome = match action {
            Action::Borrow(title) => {
                self.ledger.undo_borrow(&title);
                Outcome::UndoneBorrow(title)
            },
            Action::Return(title) => {
                self.ledger.undo_return(&title);
                Outcome::UndoneReturn(title)
            },
        };
        tracing::debug!(title = %outcome.title(), "undone");
        Ok(outcome)
    }

    /// Currently borrowed titles, sorted.
    pub fn list_borrowed(&self) -> Vec<BookTitle> {
        sorted_view(self.ledger.borrowed())
    }

    /// Returned titles, sorted.
    pub fn list_returned(&self) -> Vec<BookTitle> {
        sorted_view(self.ledger.returned())
    }

    /// Status of a book, or `None` when the title is unknown (or blank).
    pub fn query_status(&self, raw: &str) -> Option<BookStatus> {
        BookTitle::new(raw).ok().and_then(|title| self.ledger.status_of(&title))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
