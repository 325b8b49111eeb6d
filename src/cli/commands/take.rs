//! Take command: check a book out to a person.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use libris_lib::LibrisError;

use super::{fail_not_durable, open_library};
use crate::input::{non_empty, prompt_days, prompt_isbn, prompt_until_valid};

/// Execute the take command.
///
/// `PersonAtCap` re-prompts for a different person and `LoanTooLong`
/// re-prompts for the period, per the circulation rules.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or saved, or if the
/// input stream closes.
pub fn execute(file: &Path, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut library = open_library(file)?;

    if !library.catalog().exists_any(true) {
        writeln!(out, "All books are taken at this moment.")?;
        return Ok(());
    }

    let isbn = prompt_isbn(input, out, library.catalog(), true)?;
    let mut person = prompt_until_valid(input, out, "person name: ", non_empty)?;
    let mut days = prompt_days(input, out)?;
    let today = Local::now().date_naive();

    loop {
        match library.checkout(&isbn, &person, days, today) {
            Ok(book) => {
                writeln!(
                    out,
                    "Book '{}' has been taken by {person} successfully.",
                    book.name
                )?;
                return Ok(());
            }
            Err(e @ LibrisError::PersonAtCap { .. }) => {
                writeln!(out, "{e}.")?;
                person = prompt_until_valid(input, out, "person name: ", non_empty)?;
            }
            Err(e @ LibrisError::LoanTooLong { .. }) => {
                writeln!(out, "{e}.")?;
                days = prompt_days(input, out)?;
            }
            Err(e) if e.is_storage() => return fail_not_durable(out, e),
            Err(e) => {
                writeln!(out, "{e}.")?;
                return Ok(());
            }
        }
    }
}
