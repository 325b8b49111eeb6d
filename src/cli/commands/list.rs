//! List command: print the catalog, optionally filtered.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use libris_lib::{FilterMode, filter};

use super::open_library;
use crate::format::write_table;
use crate::input::{non_empty, prompt_line, prompt_until_valid};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or if the streams
/// fail.
pub fn execute(file: &Path, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let library = open_library(file)?;

    writeln!(out, "'a' - list by author")?;
    writeln!(out, "'c' - list by category")?;
    writeln!(out, "'l' - list by language")?;
    writeln!(out, "'i' - list by ISBN")?;
    writeln!(out, "'n' - list by name")?;
    writeln!(out, "'av' - list of available books")?;
    writeln!(out, "'t' - list of taken books")?;
    writeln!(out, "Leave blank to list all books")?;

    let code = prompt_line(input, out, "Enter filter: ")?;
    let mode = FilterMode::from_code(&code);

    let value = if mode.needs_value() {
        let query = format!("Enter {}: ", value_label(mode));
        prompt_until_valid(input, out, &query, non_empty)?
    } else {
        String::new()
    };

    let matches = filter(library.catalog(), mode, &value);
    if matches.is_empty() {
        writeln!(out, "No books were found.")?;
        return Ok(());
    }

    write_table(out, &matches)?;
    Ok(())
}

const fn value_label(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::Author => "author",
        FilterMode::Category => "category",
        FilterMode::Language => "language",
        FilterMode::Isbn => "ISBN",
        _ => "name",
    }
}
