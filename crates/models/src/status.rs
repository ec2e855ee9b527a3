use crate::error::{Error, ErrorKind};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Lending status of a known book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookStatus {
    /// On the shelf; either returned or never lent out since it was recorded.
    Available,
    /// Currently lent out.
    Borrowed,
}
impl BookStatus {
    /// Canonical string, as persisted in the `books.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        }
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, BookStatus::Borrowed)
    }
}
impl FromStr for BookStatus {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "available" => Self::Available,
            "borrowed" => Self::Borrowed,
            _ => exn::bail!(ErrorKind::InvalidStatus(s.to_string())),
        })
    }
}
impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
