//! Interactive menu loop, the original operator workflow.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use super::{add, delete, list, open_library, return_book, take};
use crate::input::prompt_line;

/// Execute the interactive shell.
///
/// Steers straight to `add` while the catalog is empty. `q` (or a closed
/// input stream) quits.
///
/// # Errors
///
/// Returns an error if a dispatched command fails.
pub fn execute(file: &Path, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Welcome to the book library!")?;

    loop {
        // Re-open each turn: commands persist per mutation, so the file is
        // the source of truth between turns.
        let library = open_library(file)?;
        if library.catalog().is_empty() {
            writeln!(out, "The library is empty. You should add a new book.")?;
            add::execute(file, input, out)?;
            continue;
        }

        writeln!(out)?;
        writeln!(out, "Command list:")?;
        writeln!(out, "'a' - to add a new book")?;
        writeln!(out, "'t' - to take a book")?;
        writeln!(out, "'r' - to return a book")?;
        writeln!(out, "'l' - to list the books")?;
        writeln!(out, "'d' - to delete a book")?;
        writeln!(out, "'q' - to quit")?;
        writeln!(out)?;

        let command = prompt_line(input, out, "Type a command character: ")?;
        match command.as_str() {
            "a" => add::execute(file, input, out)?,
            "t" => take::execute(file, input, out)?,
            "r" => return_book::execute(file, input, out)?,
            "l" => list::execute(file, input, out)?,
            "d" => delete::execute(file, input, out)?,
            "q" | "" => return Ok(()),
            other => {
                writeln!(out, "Command {other} does not exist. Try again.")?;
            }
        }
    }
}
