//! Return command: take a loaned book back in.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use libris_lib::LibrisError;

use super::{fail_not_durable, open_library};
use crate::input::{non_empty, prompt_isbn, prompt_until_valid};

/// Execute the return command.
///
/// `WrongBorrower` re-prompts for the correct person name.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or saved, or if the
/// input stream closes.
pub fn execute(file: &Path, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut library = open_library(file)?;

    if !library.catalog().exists_any(false) {
        writeln!(out, "No books are taken at this moment.")?;
        return Ok(());
    }

    let isbn = prompt_isbn(input, out, library.catalog(), false)?;
    let mut person = prompt_until_valid(input, out, "person name: ", non_empty)?;
    let today = Local::now().date_naive();

    loop {
        match library.return_book(&isbn, &person, today) {
            Ok(receipt) => {
                let message = if receipt.late {
                    "At least you gave it back."
                } else {
                    "Book has been returned successfully."
                };
                writeln!(out, "{message}")?;
                return Ok(());
            }
            Err(e @ LibrisError::WrongBorrower { .. }) => {
                writeln!(out, "{e}.")?;
                person = prompt_until_valid(input, out, "person name: ", non_empty)?;
            }
            Err(e) if e.is_storage() => return fail_not_durable(out, e),
            Err(e) => {
                writeln!(out, "{e}.")?;
                return Ok(());
            }
        }
    }
}
