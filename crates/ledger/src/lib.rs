//! Lending bookkeeping: who has what, and how to take it back.
//!
//! # Architecture
//! - **[`Ledger`]**: current status of every known title plus the borrowed
//!   and returned lists. Rebuilt from the store at startup.
//! - **[`History`]**: stack of reversible [`Action`]s; only the top is ever
//!   undone. Lives in memory only.
//! - **[`Engine`]**: the single entry point for callers. Normalizes raw
//!   titles, validates transitions, writes through to the
//!   [`BookStore`](shelf_store::BookStore) and only then updates the ledger
//!   and history.
//! - **[`sorted_view`]**: ordering of title lists for display.
//!
//! The engine never prompts or renders anything; callers turn each
//! [`Outcome`] or [`error::ErrorKind`] into whatever messaging they need.

mod engine;
pub mod error;
mod history;
mod ledger;
mod sort;

pub use crate::engine::{Engine, Outcome};
pub use crate::history::{Action, History};
pub use crate::ledger::{Ledger, ReturnedHistory};
pub use crate::sort::{quick_sort, sorted_view};
