//! Command-line and shell command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file, overriding the configured one
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Lend out a book
    Borrow {
        /// Book name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Take back a lent-out book
    Return {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Undo the most recent borrow or return
    Undo,
    /// Show borrowed books, sorted
    Borrowed,
    /// Show returned books, sorted
    Returned,
    /// Look up the status of a book
    Status {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// Read commands from standard input, one per line (the default)
    Shell,
}

/// One line typed into the interactive shell.
#[derive(Debug, Parser)]
#[command(name = "shelf", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

pub fn join(words: &[String]) -> String {
    words.join(" ")
}
