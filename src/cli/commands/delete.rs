//! Delete command: permanently remove an available book.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use super::{fail_not_durable, open_library};
use crate::input::prompt_isbn;

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or saved, or if the
/// input stream closes.
pub fn execute(file: &Path, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut library = open_library(file)?;

    if !library.catalog().exists_any(true) {
        writeln!(
            out,
            "All books are taken currently. No available books to delete."
        )?;
        return Ok(());
    }

    let isbn = prompt_isbn(input, out, library.catalog(), true)?;
    match library.delete_book(&isbn) {
        Ok(book) => writeln!(out, "Book '{}' has been removed successfully.", book.name)?,
        Err(e) if e.is_storage() => return fail_not_durable(out, e),
        Err(e) => writeln!(out, "{e}.")?,
    }
    Ok(())
}
