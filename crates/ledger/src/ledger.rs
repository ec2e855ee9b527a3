//! In-memory source of truth for book status.

use derive_more::Display;
use shelf_models::{BookStatus, BookTitle};
use std::collections::HashMap;

/// What happens to a title's entries in the returned list when it is
/// borrowed again.
#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReturnedHistory {
    /// The returned list is an append-only log of every return, even for
    /// books that have since been lent out again.
    #[default]
    #[display("keep")]
    Keep,
    /// Borrowing a book removes it from the returned list.
    #[display("purge")]
    Purge,
}

/// Current status of every known title, plus the borrowed and returned
/// lists.
///
/// A title is in the borrowed list exactly while its status is
/// [`BookStatus::Borrowed`]. The returned list records returns; see
/// [`ReturnedHistory`] for whether it forgets them on re-borrow.
///
/// The ledger itself performs no validation: the [`Engine`](crate::Engine)
/// checks preconditions and persists changes before calling the `mark_*` and
/// `undo_*` methods.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    statuses: HashMap<BookTitle, BookStatus>,
    borrowed: Vec<BookTitle>,
    returned: Vec<BookTitle>,
    returned_history: ReturnedHistory,
}

impl Ledger {
    pub fn new(returned_history: ReturnedHistory) -> Self {
        Self {
            returned_history,
            ..Self::default()
        }
    }

    /// Build a ledger from persisted records, in the order given.
    ///
    /// Borrowed titles go to the borrowed list, everything else to the
    /// returned list.
    pub fn from_records(
        records: impl IntoIterator<Item = (BookTitle, BookStatus)>,
        returned_history: ReturnedHistory,
    ) -> Self {
        let mut ledger = Self::new(returned_history);
        for (title, status) in records {
            match status {
                BookStatus::Borrowed => ledger.borrowed.push(title.clone()),
                BookStatus::Available => ledger.returned.push(title.clone()),
            }
            ledger.statuses.insert(title, status);
        }
        ledger
    }

    pub fn status_of(&self, title: &BookTitle) -> Option<BookStatus> {
        self.statuses.get(title).copied()
    }

    pub fn is_borrowed(&self, title: &BookTitle) -> bool {
        self.status_of(title).is_some_and(|s| s.is_borrowed())
    }

    pub fn in_borrowed_list(&self, title: &BookTitle) -> bool {
        self.borrowed.contains(title)
    }

    pub fn in_returned_list(&self, title: &BookTitle) -> bool {
        self.returned.contains(title)
    }

    pub fn mark_borrowed(&mut self, title: &BookTitle) {
        self.statuses.insert(title.clone(), BookStatus::Borrowed);
        self.borrowed.push(title.clone());
        if self.returned_history == ReturnedHistory::Purge {
            self.returned.retain(|t| t != title);
        }
    }

    pub fn mark_returned(&mut self, title: &BookTitle) {
        self.statuses.insert(title.clone(), BookStatus::Available);
        self.borrowed.retain(|t| t != title);
        self.returned.push(title.clone());
    }

    /// Forget a title entirely, as if it had never been borrowed.
    pub fn undo_borrow(&mut self, title: &BookTitle) {
        remove_first(&mut self.borrowed, title);
        self.statuses.remove(title);
    }

    /// Put a returned title back on loan.
    pub fn undo_return(&mut self, title: &BookTitle) {
        remove_first(&mut self.returned, title);
        self.statuses.insert(title.clone(), BookStatus::Borrowed);
        if !self.borrowed.contains(title) {
            self.borrowed.push(title.clone());
        }
    }

    pub fn borrowed(&self) -> &[BookTitle] {
        &self.borrowed
    }

    pub fn returned(&self) -> &[BookTitle] {
        &self.returned
    }

    /// Number of known titles.
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

fn remove_first(list: &mut Vec<BookTitle>, title: &BookTitle) {
    if let Some(position) = list.iter().position(|t| t == title) {
        list.remove(position);
    }
}
