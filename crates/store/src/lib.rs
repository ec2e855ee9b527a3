//! SQLite persistence for book lending status.
//!
//! The store is the durable mirror of one thing only: which titles are known
//! and whether each is currently borrowed. Lists of borrowed/returned books
//! and the undo history live in memory and are rebuilt from
//! [`BookStore::load`] at startup.
//!
//! # Schema
//! A single `books` table with two text columns, `name` (primary key, the
//! normalized title) and `status` (`"Borrowed"` or `"Available"`). It is
//! created on first connect if absent.

pub mod backend;
mod db;
pub mod error;
mod models;

pub use crate::backend::{BookStore, SqliteStore};
pub use crate::db::Database;
use std::sync::Arc;

pub type StoreHandle = Arc<dyn BookStore>;
