//! cordova-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use console::{style, Term};
use cordova_scaffold::commands::NewCommand;
use cordova_scaffold::{observability, ScaffoldError};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cordova-scaffold")]
#[command(version)]
#[command(about = "Interactively create a new Cordova plugin", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(err) = observability::init() {
        eprintln!("{} failed to initialize logging: {err}", style("Warning:").yellow());
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if is_cancelled(&err) {
                // dialoguer hides the cursor while a prompt is active
                let _ = Term::stderr().show_cursor();
            }
            tracing::debug!(error = ?err, "plugin generation failed");
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;
    NewCommand::new(working_dir)?.execute()?;
    Ok(())
}

fn is_cancelled(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ScaffoldError>()
        .is_some_and(ScaffoldError::is_cancelled)
}

/// The single line printed to stderr when a run fails
fn failure_message(err: &anyhow::Error) -> String {
    if is_cancelled(err) {
        style("✗ Plugin generation stopped.").red().bold().to_string()
    } else {
        format!("{} {err:#}", style("Error:").red().bold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_is_one_error_line() {
        let err = anyhow::Error::new(ScaffoldError::Prompt {
            field: "id",
            reason: "not a terminal".to_string(),
        })
        .context("Failed to collect answers");

        let message = failure_message(&err);

        assert_eq!(message.matches("Error:").count(), 1);
        assert_eq!(message.lines().count(), 1);
        assert!(message.contains("Failed to collect answers"));
        assert!(message.contains("not a terminal"));
    }

    #[test]
    fn test_failure_message_for_cancellation() {
        let err = anyhow::Error::new(ScaffoldError::Cancelled);

        let message = failure_message(&err);

        assert!(is_cancelled(&err));
        assert!(message.contains("Plugin generation stopped."));
        assert!(!message.contains("Error:"));
    }
}
