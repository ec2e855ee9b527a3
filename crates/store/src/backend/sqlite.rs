//! SQLite-backed book store.

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::BookRow;
use crate::backend::BookStore;
use async_trait::async_trait;
use exn::ResultExt;
use shelf_models::{BookStatus, BookTitle};
use sqlx::SqlitePool;
use tracing::instrument;

/// Book store over the single `books` table.
///
/// Rows are returned by [`load()`](BookStore::load) in the order their title
/// was first recorded: updating a status keeps the row in place.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}
impl From<&Database> for SqliteStore {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone() }
    }
}

#[async_trait]
impl BookStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    #[instrument(skip(self))]
    async fn load(&self) -> Result<Vec<(BookTitle, BookStatus)>> {
        let rows: Vec<BookRow> = sqlx::query_as(include_str!("../../queries/load_books.sql"))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        let records = rows.into_iter().map(|r| r.try_into()).collect::<Result<Vec<_>>>()?;
        tracing::debug!(count = records.len(), "loaded book records");
        Ok(records)
    }

    #[instrument(skip(self), fields(title = %title))]
    async fn upsert(&self, title: &BookTitle, status: BookStatus) -> Result<()> {
        let row = BookRow::from((title, status));
        sqlx::query(include_str!("../../queries/upsert_book.sql"))
            .bind(row.name)
            .bind(row.status)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }

    #[instrument(skip(self), fields(title = %title))]
    async fn delete(&self, title: &BookTitle) -> Result<()> {
        sqlx::query(include_str!("../../queries/delete_book.sql"))
            .bind(title.as_str())
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }
}
