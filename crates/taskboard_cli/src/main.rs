//! Maintenance CLI for the task database.
//!
//! # Responsibility
//! - Seed the starter tasks into an empty database.
//! - Reset the database by deleting every task row.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use taskboard_core::{RepoError, SqliteTaskRepository, Status, TaskRepository, DEFAULT_TASKS};

/// Task database maintenance commands.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the task database file
    #[arg(short, long, default_value = "taskboard.sqlite3")]
    database: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert the starter tasks when the task table is empty
    Seed,
    /// Delete every task row
    Reset,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RepoError> {
    println!("Opening task database at {}...", cli.database.display());
    let mut repo = SqliteTaskRepository::at_path(&cli.database);
    repo.initialize()?;

    // Release the connection even when the command itself failed.
    let outcome = execute(&repo, &cli.command);
    repo.close()?;
    outcome
}

fn execute(repo: &SqliteTaskRepository, command: &Command) -> Result<(), RepoError> {
    match command {
        Command::Seed => {
            let inserted = repo.seed_if_empty(DEFAULT_TASKS)?;
            if inserted == 0 {
                println!("Task table already has rows; nothing to seed.");
            } else {
                println!("Seeded {inserted} starter task(s).");
            }

            let counts = repo.count_by_status()?;
            let summary = Status::ALL
                .iter()
                .map(|status| format!("{}: {}", status.label(), counts.for_status(*status)))
                .collect::<Vec<_>>()
                .join(", ");
            println!("Board now holds {summary}.");
            Ok(())
        }
        Command::Reset => {
            let removed = repo.clear_all()?;
            println!("Removed {removed} task(s).");
            Ok(())
        }
    }
}
