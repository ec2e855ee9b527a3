//! Turns engine results into the text shown to the user.

use shelf_ledger::error::{Error as LedgerError, ErrorKind as LedgerErrorKind};
use shelf_ledger::Outcome;
use shelf_models::{BookStatus, BookTitle, normalize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Something to tell the user, and how seriously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    /// The request was refused; nothing changed.
    Warning(String),
    /// Something broke underneath (database unreachable, ...).
    Fault(String),
}
impl Report {
    pub fn is_ok(&self) -> bool {
        matches!(self, Report::Info(_))
    }
}
impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Report::Info(message) => f.write_str(message),
            Report::Warning(message) => write!(f, "warning: {message}"),
            Report::Fault(message) => write!(f, "error: {message}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Borrowed,
    Returned,
}

pub fn outcome(outcome: &Outcome) -> Report {
    Report::Info(outcome.to_string())
}

pub fn error(err: &LedgerError) -> Report {
    match &**err {
        LedgerErrorKind::EmptyTitle(_) => Report::Warning("Please enter a book name.".to_string()),
        LedgerErrorKind::Unavailable(title) => Report::Warning(format!("'{title}' is already borrowed.")),
        LedgerErrorKind::NotBorrowed(title) => Report::Warning(format!("'{title}' is not marked as borrowed.")),
        LedgerErrorKind::NothingToUndo => Report::Info("No actions to undo.".to_string()),
        LedgerErrorKind::UndoMismatch(_) => Report::Warning("No previous actions to undo.".to_string()),
        kind @ (LedgerErrorKind::Store { .. } | LedgerErrorKind::Load) => {
            tracing::error!("{err:?}");
            Report::Fault(kind.to_string())
        },
    }
}

pub fn list(kind: ListKind, titles: &[BookTitle]) -> Report {
    let (icon, label, empty) = match kind {
        ListKind::Borrowed => ("📕", "Borrowed", "No borrowed books."),
        ListKind::Returned => ("📗", "Returned", "No returned books."),
    };
    if titles.is_empty() {
        return Report::Info(empty.to_string());
    }
    let lines: Vec<String> = titles.iter().map(|title| format!("{icon} {title} ({label})")).collect();
    Report::Info(lines.join("\n"))
}

pub fn status(raw: &str, status: Option<BookStatus>) -> Report {
    let shown = status.map_or("Not Found", |s| s.as_str());
    Report::Info(format!("The status of '{}' is: {shown}", normalize(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use shelf_ledger::Action;
    use shelf_ledger::error::Operation;

    fn title(raw: &str) -> BookTitle {
        BookTitle::new(raw).unwrap()
    }

    #[rstest]
    #[case(LedgerErrorKind::EmptyTitle(Operation::Borrow), Report::Warning("Please enter a book name.".to_string()))]
    #[case(LedgerErrorKind::Unavailable(title("dune")), Report::Warning("'Dune' is already borrowed.".to_string()))]
    #[case(LedgerErrorKind::NotBorrowed(title("dune")), Report::Warning("'Dune' is not marked as borrowed.".to_string()))]
    #[case(LedgerErrorKind::NothingToUndo, Report::Info("No actions to undo.".to_string()))]
    #[case(LedgerErrorKind::UndoMismatch(Action::Borrow(title("dune"))), Report::Warning("No previous actions to undo.".to_string()))]
    #[case(LedgerErrorKind::Store { operation: Operation::Return, title: title("dune") }, Report::Fault("could not persist return of 'Dune'".to_string()))]
    fn test_error_messages(#[case] kind: LedgerErrorKind, #[case] expected: Report) {
        let err = LedgerError::from(kind);
        assert_eq!(error(&err), expected);
    }

    #[test]
    fn test_lists() {
        assert_eq!(list(ListKind::Borrowed, &[]), Report::Info("No borrowed books.".to_string()));
        assert_eq!(list(ListKind::Returned, &[]), Report::Info("No returned books.".to_string()));
        assert_eq!(
            list(ListKind::Borrowed, &[title("dune"), title("emma")]).to_string(),
            "📕 Dune (Borrowed)\n📕 Emma (Borrowed)"
        );
        assert_eq!(list(ListKind::Returned, &[title("dune")]).to_string(), "📗 Dune (Returned)");
    }

    #[test]
    fn test_status() {
        assert_eq!(
            status(" moby dick", Some(BookStatus::Borrowed)).to_string(),
            "The status of 'Moby Dick' is: Borrowed"
        );
        assert_eq!(status("emma", None).to_string(), "The status of 'Emma' is: Not Found");
    }

    #[test]
    fn test_report_display() {
        assert_eq!(Report::Warning("careful".to_string()).to_string(), "warning: careful");
        assert_eq!(Report::Fault("broken".to_string()).to_string(), "error: broken");
        assert!(Report::Info(String::new()).is_ok());
    }
}
