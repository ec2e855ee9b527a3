//! Application Error Types
//!
//! Failures that stop the program before or outside of a single command.
//! Per-command rejections are reported through [`Report`](crate::present::Report)
//! instead.

use derive_more::{Display, Error};

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for application startup and I/O.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not open the book database")]
    Database,
    #[display("could not load the ledger")]
    Ledger,
    #[display("terminal I/O error")]
    Io,
}
