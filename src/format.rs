//! Plain-text table output for book listings.

use std::io::{self, Write};

use libris_lib::Book;

const RULE: &str =
    "--------------------------------------------------------------------------------------------------------------------";

/// Format the lending state column.
#[must_use]
pub fn format_lending_state(book: &Book) -> String {
    match (book.taken_by.as_deref(), book.estimated_return_date) {
        (Some(person), Some(due)) => format!("taken by {person} until {due}"),
        _ => "available".to_string(),
    }
}

/// Format a single table row for a book.
#[must_use]
pub fn format_book_row(book: &Book) -> String {
    format!(
        "{:<21} | {:<20} | {:<10} | {:<10} | {:<11} | {:<14} | {}",
        book.name,
        book.author,
        book.category,
        book.language,
        book.publication_date,
        book.isbn,
        format_lending_state(book),
    )
}

/// Write the full listing table: header rule, one row per book, footer
/// rule.
///
/// # Errors
///
/// Returns an I/O error if the writer fails.
pub fn write_table(out: &mut impl Write, books: &[&Book]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "{:<21} | {:<20} | {:<10} | {:<10} | {:<11} | {:<14} | {}",
        "Name", "Author", "Category", "Language", "Date", "ISBN", "State",
    )?;
    writeln!(out, "{RULE}")?;
    for book in books {
        writeln!(out, "{}", format_book_row(book))?;
    }
    writeln!(out, "{RULE}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_book() -> Book {
        Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "1")
    }

    #[test]
    fn test_available_row() {
        let row = format_book_row(&make_book());
        assert!(row.starts_with("Dune"));
        assert!(row.ends_with("available"));
    }

    #[test]
    fn test_taken_row_shows_borrower_and_due_date() {
        let mut book = make_book();
        book.set_taken("Alice", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        let row = format_book_row(&book);
        assert!(row.contains("taken by Alice until 2026-09-01"));
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let book = make_book();
        let mut out = Vec::new();
        write_table(&mut out, &[&book]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Name"));
        assert!(text.contains("Dune"));
        assert_eq!(text.matches(RULE).count(), 3);
    }
}
