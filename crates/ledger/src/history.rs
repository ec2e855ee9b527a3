//! Undo history of reversible actions.

use derive_more::Display;
use shelf_models::BookTitle;

/// A state change the engine performed and can revert.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Action {
    #[display("borrow of '{_0}'")]
    Borrow(BookTitle),
    #[display("return of '{_0}'")]
    Return(BookTitle),
}
impl Action {
    pub fn title(&self) -> &BookTitle {
        match self {
            Action::Borrow(title) | Action::Return(title) => title,
        }
    }
}

/// Last-in-first-out stack of [`Action`]s.
///
/// Unbounded: one user issuing commands by hand won't get anywhere near
/// memory limits. Never persisted.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<Action>,
}
impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.entries.push(action);
    }

    /// Remove and return the most recent action.
    pub fn pop_last(&mut self) -> Option<Action> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&Action> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
