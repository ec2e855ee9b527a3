//! Runs commands against the engine, one-shot or as an interactive shell.

use crate::cli::{Command, ShellLine, join};
use crate::present::{self, ListKind, Report};
use clap::Parser;
use shelf_ledger::error::Result as LedgerResult;
use shelf_ledger::{Engine, Outcome};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "shelf> ";

fn report(result: LedgerResult<Outcome>) -> Report {
    match result {
        Ok(outcome) => present::outcome(&outcome),
        Err(err) => present::error(&err),
    }
}

/// Run a single command and describe what happened.
pub async fn execute(engine: &mut Engine, command: &Command) -> Report {
    match command {
        Command::Borrow { title } => report(engine.borrow(&join(title)).await),
        Command::Return { title } => report(engine.return_book(&join(title)).await),
        Command::Undo => report(engine.undo().await),
        Command::Borrowed => present::list(ListKind::Borrowed, &engine.list_borrowed()),
        Command::Returned => present::list(ListKind::Returned, &engine.list_returned()),
        Command::Status { title } => {
            let raw = join(title);
            present::status(&raw, engine.query_status(&raw))
        },
        Command::Shell => Report::Warning("Already in the shell.".to_string()),
    }
}

/// Read commands line by line until end of input or `quit`.
///
/// Every line gets exactly one response written to `output`; the undo
/// history lasts for the whole session.
pub async fn shell<R, W>(engine: &mut Engine, input: R, mut output: W, prompt: bool) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    loop {
        if prompt {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            _ => (),
        }
        let response = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => execute(engine, &parsed.command).await.to_string(),
            // Also covers `help`, which clap reports as an "error".
            Err(err) => err.to_string().trim_end().to_string(),
        };
        output.write_all(response.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}
