//! In-memory book store for testing.

use crate::backend::BookStore;
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use shelf_models::{BookStatus, BookTitle};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-memory book store for testing.
///
/// Records are kept in insertion order behind a [`RwLock`], so all trait
/// methods can operate on `&self`. Writes can be made to fail on demand with
/// [`set_failing()`](Self::set_failing) to exercise fault handling.
///
/// # Examples
///
/// ```
/// use shelf_models::{BookStatus, BookTitle};
/// use shelf_store::backend::{BookStore, MockStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = MockStore::with_records([("dune", BookStatus::Borrowed)]);
/// assert_eq!(store.load().await.unwrap().len(), 1);
///
/// store.set_failing(true);
/// let emma = BookTitle::new("emma").unwrap();
/// assert!(store.upsert(&emma, BookStatus::Borrowed).await.is_err());
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    records: RwLock<Vec<(BookTitle, BookStatus)>>,
    failing: AtomicBool,
}

impl MockStore {
    /// Create a mock store pre-populated with records.
    ///
    /// Panics if any title is blank. If test setup is wrong, then test
    /// should not pass.
    pub fn with_records(records: impl IntoIterator<Item = (impl AsRef<str>, BookStatus)>) -> Self {
        let mut list: Vec<(BookTitle, BookStatus)> = Vec::new();
        for (raw, status) in records {
            let Ok(title) = BookTitle::new(raw.as_ref()) else {
                panic!("MockStore::with_records: blank title {:?}", raw.as_ref());
            };
            match list.iter_mut().find(|(t, _)| *t == title) {
                Some(existing) => existing.1 = status,
                None => list.push((title, status)),
            }
        }
        Self {
            records: RwLock::new(list),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with [`ErrorKind::Unavailable`] (or
    /// succeed again, with `false`).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the stored records, bypassing failure injection.
    pub async fn records(&self) -> Vec<(BookTitle, BookStatus)> {
        self.records.read().await.clone()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            exn::bail!(ErrorKind::Unavailable);
        }
        Ok(())
    }
}

#[async_trait]
impl BookStore for MockStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn load(&self) -> Result<Vec<(BookTitle, BookStatus)>> {
        self.check()?;
        Ok(self.records.read().await.clone())
    }

    async fn upsert(&self, title: &BookTitle, status: BookStatus) -> Result<()> {
        self.check()?;
        let mut records = self.records.write().await;
        match records.iter_mut().find(|(t, _)| t == title) {
            Some(existing) => existing.1 = status,
            None => records.push((title.clone(), status)),
        }
        Ok(())
    }

    async fn delete(&self, title: &BookTitle) -> Result<()> {
        self.check()?;
        self.records.write().await.retain(|(t, _)| t != title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(raw: &str) -> BookTitle {
        BookTitle::new(raw).unwrap()
    }

    #[tokio::test]
    async fn test_with_records_normalizes_and_dedups() {
        let store = MockStore::with_records([("dune", BookStatus::Borrowed), ("DUNE ", BookStatus::Available)]);
        assert_eq!(store.load().await.unwrap(), vec![(title("Dune"), BookStatus::Available)]);
    }

    #[tokio::test]
    async fn test_upsert_and_delete() {
        let store = MockStore::default();
        store.upsert(&title("dune"), BookStatus::Borrowed).await.unwrap();
        store.upsert(&title("emma"), BookStatus::Borrowed).await.unwrap();
        store.upsert(&title("dune"), BookStatus::Available).await.unwrap();
        store.delete(&title("emma")).await.unwrap();
        assert_eq!(store.records().await, vec![(title("Dune"), BookStatus::Available)]);
    }

    #[tokio::test]
    async fn test_failing_store_changes_nothing() {
        let store = MockStore::with_records([("dune", BookStatus::Borrowed)]);
        store.set_failing(true);
        let err = store.delete(&title("dune")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Unavailable));
        let err = store.upsert(&title("emma"), BookStatus::Borrowed).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Unavailable));
        assert!(store.load().await.is_err());
        assert_eq!(store.records().await, vec![(title("Dune"), BookStatus::Borrowed)]);

        store.set_failing(false);
        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
