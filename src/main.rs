//! shelf - keep track of which books are lent out.

mod app;
mod cli;
mod error;
mod present;

use crate::cli::{Cli, Command};
use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::ResultExt;
use shelf_config::Config;
use shelf_ledger::Engine;
use shelf_store::{Database, SqliteStore};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, configured: &str) {
    let level = if verbose { "debug" } else { configured };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

async fn open_database(config: &Config) -> Result<Database> {
    if let Some(parent) = config.database.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).or_raise(|| ErrorKind::Database)?;
    }
    Database::connect(&config.database).await.or_raise(|| ErrorKind::Database)
}

/// Everything that happens while the database is open.
async fn run(db: &Database, config: &Config, command: Command) -> Result<ExitCode> {
    let store = Arc::new(SqliteStore::from(db));
    let mut engine = Engine::open(store, config.returned_history).await.or_raise(|| ErrorKind::Ledger)?;
    if command == Command::Shell {
        let prompt = std::io::stdin().is_terminal();
        let input = BufReader::new(tokio::io::stdin());
        app::shell(&mut engine, input, tokio::io::stdout(), prompt).await.or_raise(|| ErrorKind::Io)?;
        return Ok(ExitCode::SUCCESS);
    }
    let report = app::execute(&mut engine, &command).await;
    if report.is_ok() {
        println!("{report}");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{report}");
        Ok(ExitCode::FAILURE)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut config = match Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config) {
        Ok(config) => config,
        Err(err) => {
            // Logging isn't set up yet; show the whole error tree.
            eprintln!("error: {}\n{err:?}", &*err);
            return ExitCode::FAILURE;
        },
    };
    init_logging(cli.verbose, &config.log);
    if let Some(database) = cli.database {
        config.database = database;
    }

    let db = match open_database(&config).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("{err:?}");
            eprintln!("error: {}: {}", &*err, config.database.display());
            return ExitCode::FAILURE;
        },
    };
    let result = run(&db, &config, cli.command.unwrap_or(Command::Shell)).await;
    db.close().await;
    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:?}");
            eprintln!("error: {}", &*err);
            ExitCode::FAILURE
        },
    }
}
