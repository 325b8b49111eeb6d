//! `libris` - small-library inventory and circulation tracker.
//!
//! This crate provides the CLI surface for `libris-lib`:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`input`] - Interactive prompting with retry-until-valid
//! - [`format`] - Plain-text table output
//! - [`logging`] - Tracing setup

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod format;
pub mod input;
pub mod logging;

use anyhow::Result;
use clap::Parser;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    cli.execute()
}
