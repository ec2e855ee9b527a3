//! Book store trait and implementations.
//!
//! This module defines the `BookStore` trait: the durable mirror of which
//! books are known and whether each one is currently lent out.

#[cfg(feature = "mock")]
mod mock;
mod sqlite;

#[cfg(feature = "mock")]
pub use self::mock::MockStore;
pub use self::sqlite::SqliteStore;
use crate::error::Result;
use async_trait::async_trait;
use shelf_models::{BookStatus, BookTitle};

/// Durable title→status records.
///
/// At most one record exists per title. Every mutating call is committed
/// before it returns; there are no transactions spanning several titles.
/// Failures are always returned to the caller, never swallowed.
///
/// # Examples
///
/// ```
/// use shelf_models::{BookStatus, BookTitle};
/// use shelf_store::backend::BookStore;
/// use shelf_store::error::Result;
///
/// async fn lend(store: &dyn BookStore, raw: &str) -> Result<()> {
///     let title = BookTitle::new(raw).expect("non-empty title");
///     store.upsert(&title, BookStatus::Borrowed).await
/// }
/// ```
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Name of the store implementation, used for logging only.
    fn name(&self) -> &str;

    /// Read every record.
    ///
    /// Titles are unique within the result. The order is whatever the store
    /// finds convenient, but repeated loads of unchanged data return the
    /// same order.
    async fn load(&self) -> Result<Vec<(BookTitle, BookStatus)>>;

    /// Insert or replace the record for `title`.
    async fn upsert(&self, title: &BookTitle, status: BookStatus) -> Result<()>;

    /// Remove the record for `title`. Removing an unknown title is not an error.
    async fn delete(&self, title: &BookTitle) -> Result<()>;
}
