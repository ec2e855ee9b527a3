//! Core value types for tracking lent-out books.
//!
//! A book is identified only by its name. Every raw name coming from a user
//! goes through [`normalize`] before it is used as a key, so `" the hobbit "`
//! and `"THE HOBBIT"` refer to the same [`BookTitle`].

pub mod error;
mod status;
mod title;

pub use crate::status::BookStatus;
pub use crate::title::{BookTitle, normalize};
