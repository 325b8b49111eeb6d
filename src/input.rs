//! Interactive prompting: ask the operator for a value, retry until it
//! validates.
//!
//! Malformed input is always recovered locally by re-prompting; it never
//! surfaces as a hard failure. Functions are generic over the reader and
//! writer so tests can drive them with in-memory buffers.

use std::io::{self, BufRead, Write};

use libris_lib::Catalog;
pub use libris_lib::util::is_valid_date;

/// A value is acceptable when it is non-empty (after trimming).
#[must_use]
pub fn non_empty(value: &str) -> bool {
    !value.is_empty()
}

/// Ask `query` until `validator` accepts the trimmed input.
///
/// # Errors
///
/// Returns an I/O error if the streams fail, including when the input
/// stream closes before a valid value is read.
pub fn prompt_until_valid(
    input: &mut impl BufRead,
    out: &mut impl Write,
    query: &str,
    validator: impl Fn(&str) -> bool,
) -> io::Result<String> {
    loop {
        let value = read_prompted_line(input, out, query)?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input stream closed")
        })?;
        if validator(&value) {
            return Ok(value);
        }
        writeln!(out, "Invalid input, try again.")?;
    }
}

/// Ask `query` once; empty input is allowed. Returns an empty string when
/// the input stream has closed.
///
/// # Errors
///
/// Returns an I/O error if the streams fail.
pub fn prompt_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    query: &str,
) -> io::Result<String> {
    Ok(read_prompted_line(input, out, query)?.unwrap_or_default())
}

/// Ask for an integer loan period, retrying on non-numeric input.
///
/// Range checking is the lending policy's job; this only guarantees a
/// parseable number.
///
/// # Errors
///
/// Returns an I/O error if the streams fail.
pub fn prompt_days(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<i64> {
    loop {
        let raw = prompt_until_valid(input, out, "period to take (in days): ", non_empty)?;
        match raw.parse::<i64>() {
            Ok(days) => return Ok(days),
            Err(_) => writeln!(out, "Invalid input, try again.")?,
        }
    }
}

/// Ask for an ISBN until the catalog has a record with that ISBN and the
/// wanted availability.
///
/// # Errors
///
/// Returns an I/O error if the streams fail.
pub fn prompt_isbn(
    input: &mut impl BufRead,
    out: &mut impl Write,
    catalog: &Catalog,
    want_available: bool,
) -> io::Result<String> {
    loop {
        let isbn = prompt_until_valid(input, out, "book ISBN: ", non_empty)?;
        if catalog.exists_by_isbn(&isbn, want_available) {
            return Ok(isbn);
        }
        writeln!(out, "Book with ISBN {isbn} doesn't exist.")?;
    }
}

/// `None` when the input stream has closed.
fn read_prompted_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    query: &str,
) -> io::Result<Option<String>> {
    write!(out, "{query}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
