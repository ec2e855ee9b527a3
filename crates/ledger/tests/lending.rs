use shelf_ledger::error::ErrorKind;
use shelf_ledger::{Engine, Outcome, ReturnedHistory};
use shelf_models::{BookStatus, BookTitle};
use shelf_store::backend::MockStore;
use shelf_store::{BookStore, Database, SqliteStore};
use std::sync::Arc;

fn names(titles: &[BookTitle]) -> Vec<&str> {
    titles.iter().map(BookTitle::as_str).collect()
}

#[tokio::test]
async fn borrow_return_undo_round() {
    let db = Database::connect_in_memory().await.unwrap();
    let mut engine = Engine::open(Arc::new(SqliteStore::from(&db)), ReturnedHistory::Keep).await.unwrap();

    engine.borrow("dune").await.unwrap();
    engine.borrow("Frank Herbert").await.unwrap();
    engine.return_book("dune").await.unwrap();
    assert_eq!(names(&engine.list_borrowed()), ["Frank Herbert"]);
    assert_eq!(names(&engine.list_returned()), ["Dune"]);

    let outcome = engine.undo().await.unwrap();
    assert!(matches!(outcome, Outcome::UndoneReturn(ref t) if t.as_str() == "Dune"));
    assert!(engine.list_returned().is_empty());
    assert_eq!(engine.query_status("Dune"), Some(BookStatus::Borrowed));
    assert_eq!(names(&engine.list_borrowed()), ["Dune", "Frank Herbert"]);
    db.close().await;
}

#[tokio::test]
async fn status_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let db = Database::connect(&path).await.unwrap();
    let mut engine = Engine::open(Arc::new(SqliteStore::from(&db)), ReturnedHistory::Keep).await.unwrap();
    engine.borrow("moby dick").await.unwrap();
    engine.borrow("emma").await.unwrap();
    engine.return_book("emma").await.unwrap();
    drop(engine);
    db.close().await;

    let db = Database::connect(&path).await.unwrap();
    let mut engine = Engine::open(Arc::new(SqliteStore::from(&db)), ReturnedHistory::Keep).await.unwrap();
    assert_eq!(engine.query_status("Moby Dick"), Some(BookStatus::Borrowed));
    assert_eq!(engine.query_status("EMMA"), Some(BookStatus::Available));
    assert_eq!(names(&engine.list_borrowed()), ["Moby Dick"]);
    assert_eq!(names(&engine.list_returned()), ["Emma"]);
    // History is not persisted.
    assert!(engine.history().is_empty());
    let err = engine.undo().await.unwrap_err();
    assert_eq!(*err, ErrorKind::NothingToUndo);
    db.close().await;
}

#[tokio::test]
async fn restart_keeps_one_row_per_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    let db = Database::connect(&path).await.unwrap();
    let mut engine = Engine::open(Arc::new(SqliteStore::from(&db)), ReturnedHistory::Keep).await.unwrap();
    engine.borrow("KİTAP").await.unwrap();
    drop(engine);
    db.close().await;

    let db = Database::connect(&path).await.unwrap();
    let mut engine = Engine::open(Arc::new(SqliteStore::from(&db)), ReturnedHistory::Keep).await.unwrap();
    assert_eq!(engine.query_status("KİTAP"), Some(BookStatus::Borrowed));
    let listed = engine.list_borrowed()[0].to_string();
    engine.return_book(&listed).await.unwrap();
    drop(engine);
    db.close().await;

    let db = Database::connect(&path).await.unwrap();
    let records = SqliteStore::from(&db).load().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].1, BookStatus::Available);
    assert_eq!(records[0].0, BookTitle::new("KİTAP").unwrap());
    db.close().await;
}

#[tokio::test]
async fn second_borrow_changes_nothing() {
    let store = Arc::new(MockStore::default());
    let mut engine = Engine::open(store.clone(), ReturnedHistory::Keep).await.unwrap();
    for raw in ["the hobbit", " THE HOBBIT", "The Hobbit "] {
        match engine.borrow(raw).await {
            Ok(outcome) => assert_eq!(outcome.title().as_str(), "The Hobbit"),
            Err(err) => assert!(matches!(&*err, ErrorKind::Unavailable(t) if t.as_str() == "The Hobbit")),
        }
    }
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.ledger().borrowed().len(), 1);
    assert_eq!(store.records().await.len(), 1);
}

#[tokio::test]
async fn returned_list_keeps_history_by_default() {
    let mut engine = Engine::open(Arc::new(MockStore::default()), ReturnedHistory::Keep).await.unwrap();
    engine.borrow("dune").await.unwrap();
    engine.return_book("dune").await.unwrap();
    engine.borrow("dune").await.unwrap();
    assert_eq!(names(&engine.list_borrowed()), ["Dune"]);
    assert_eq!(names(&engine.list_returned()), ["Dune"]);

    let mut engine = Engine::open(Arc::new(MockStore::default()), ReturnedHistory::Purge).await.unwrap();
    engine.borrow("dune").await.unwrap();
    engine.return_book("dune").await.unwrap();
    engine.borrow("dune").await.unwrap();
    assert!(engine.list_returned().is_empty());
}

#[tokio::test]
async fn ledger_and_store_agree_after_every_operation() {
    let store = Arc::new(MockStore::default());
    let mut engine = Engine::open(store.clone(), ReturnedHistory::Keep).await.unwrap();
    let script: [(&str, &str); 9] = [
        ("borrow", "dune"),
        ("borrow", "emma"),
        ("return", "dune"),
        ("borrow", "dune"),
        ("undo", ""),
        ("undo", ""),
        ("return", "emma"),
        ("undo", ""),
        ("undo", ""),
    ];
    for (op, raw) in script {
        let _ = match op {
            "borrow" => engine.borrow(raw).await,
            "return" => engine.return_book(raw).await,
            _ => engine.undo().await,
        };
        for (title, status) in store.records().await {
            assert_eq!(engine.ledger().status_of(&title), Some(status), "after {op} {raw}");
        }
        assert_eq!(engine.ledger().len(), store.records().await.len(), "after {op} {raw}");
    }
}
