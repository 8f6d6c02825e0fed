//! Interactive session loop
//!
//! Reads one command per line and feeds it to the form. Output goes to any
//! `Write` so the loop can be driven from tests.

use std::io::Write;

use anyhow::Result;
use kainji_form::{Field, SubmissionOutcome, TokenCreationForm};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::command::{Command, HELP};

#[derive(Serialize)]
struct Snapshot<'a> {
    authenticated: bool,
    draft: &'a kainji_form::Draft,
    report: &'a kainji_form::ValidationReport,
    outcome: SubmissionOutcome,
}

fn write_snapshot<W: Write>(form: &TokenCreationForm, out: &mut W) -> Result<()> {
    let snapshot = Snapshot {
        authenticated: form.is_authenticated(),
        draft: form.draft(),
        report: form.report(),
        outcome: form.outcome(),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}

fn write_fields<W: Write>(out: &mut W) -> Result<()> {
    for field in Field::ALL {
        writeln!(out, "{}", field.label())?;
        writeln!(out, "  {}", field.help())?;
    }
    Ok(())
}

fn write_outcome<W: Write>(form: &TokenCreationForm, out: &mut W) -> Result<()> {
    if let Some(message) = form.outcome().message() {
        writeln!(out, "{}", message)?;
    }
    for (field, error) in form.report() {
        writeln!(out, "  {}: {}", field.label(), error)?;
    }
    Ok(())
}

/// Run commands from `input` until it ends or `quit` is read
pub async fn run<R, W>(form: &mut TokenCreationForm, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%line, "Rejected command");
                writeln!(out, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Received command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Fields => write_fields(out)?,
            Command::Show => write_snapshot(form, out)?,
            Command::Submit => {
                form.submit().await;
                write_outcome(form, out)?;
            }
            other => {
                if let Some(event) = other.into_event() {
                    form.dispatch(event).await;
                }
            }
        }
    }

    Ok(())
}
