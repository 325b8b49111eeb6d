//! Command-line interface for `libris`.
//!
//! This module provides the CLI parsing and command routing using clap.
//! Commands collect their values interactively through [`crate::input`],
//! matching the original menu-driven workflow.

pub mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

/// `libris` - small-library inventory and circulation tracker.
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(
    author,
    version,
    about = "Small-library book inventory and circulation tracker",
    long_about = None
)]
pub struct Cli {
    /// Catalog file location
    #[arg(long, global = true, env = "LIBRIS_FILE", default_value = "books.json")]
    pub file: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run; defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new book to the catalog
    Add,

    /// Take a book out on loan
    Take,

    /// Return a taken book
    Return,

    /// List books, optionally filtered
    List,

    /// Delete an available book
    Delete,

    /// Interactive menu loop
    Shell,
}

impl Cli {
    /// Execute the selected command against stdin/stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if command execution fails.
    pub fn execute(self) -> Result<()> {
        debug!(file = %self.file.display(), command = ?self.command, "dispatching");

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        match self.command {
            Some(Commands::Add) => commands::add::execute(&self.file, &mut input, &mut out),
            Some(Commands::Take) => commands::take::execute(&self.file, &mut input, &mut out),
            Some(Commands::Return) => {
                commands::return_book::execute(&self.file, &mut input, &mut out)
            }
            Some(Commands::List) => commands::list::execute(&self.file, &mut input, &mut out),
            Some(Commands::Delete) => commands::delete::execute(&self.file, &mut input, &mut out),
            Some(Commands::Shell) | None => {
                commands::shell::execute(&self.file, &mut input, &mut out)
            }
        }
    }
}
