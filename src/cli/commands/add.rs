//! Add command: collect a new book's details and save it.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use libris_lib::Book;

use super::{fail_not_durable, open_library};
use crate::input::{is_valid_date, non_empty, prompt_until_valid};

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or saved, or if the
/// input stream closes.
pub fn execute(file: &Path, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut library = open_library(file)?;

    let name = prompt_until_valid(input, out, "new book name: ", non_empty)?;
    let author = prompt_until_valid(input, out, "new book author: ", non_empty)?;
    let category = prompt_until_valid(input, out, "new book category: ", non_empty)?;
    let language = prompt_until_valid(input, out, "new book language: ", non_empty)?;
    let publication_date = prompt_until_valid(
        input,
        out,
        "new book publication date (yyyy-MM-dd): ",
        is_valid_date,
    )?;
    let isbn = prompt_until_valid(input, out, "new book ISBN: ", non_empty)?;

    let book = Book::new(name, author, category, language, publication_date, isbn);
    match library.add_book(book) {
        Ok(()) => writeln!(out, "Book has been added successfully.")?,
        Err(e) if e.is_storage() => return fail_not_durable(out, e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
