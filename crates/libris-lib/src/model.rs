//! Core data types for libris-lib.
//!
//! Serde field names match the original books.json layout
//! (`publicationDate`, `isTaken`, ...) so existing catalog files keep
//! loading.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A single book's bibliographic and lending state.
///
/// A book is either `Available` (both lending fields unset) or `Taken`
/// (borrower and due date set). [`Book::set_taken`] and
/// [`Book::set_available`] are the only transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub name: String,
    pub author: String,
    pub category: String,
    pub language: String,

    /// Publication date in `yyyy-MM-dd` lexical form.
    pub publication_date: String,

    /// Natural key for lookups. Not enforced unique at insert time;
    /// lookups take the first match in catalog order.
    pub isbn: String,

    /// True while the book is out on loan.
    #[serde(default)]
    pub is_taken: bool,

    /// Borrower name; set only while the book is taken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_by: Option<String>,

    /// Due date; set only while the book is taken. Serialized as
    /// `yyyy-MM-dd`; older catalog files carry a `yyyy-MM-ddT00:00:00`
    /// datetime form, which loads too.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_due_date"
    )]
    pub estimated_return_date: Option<NaiveDate>,
}

/// Accepts both the plain date form and the midnight-datetime form, so
/// catalogs written by earlier tooling keep loading.
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let date_part = raw.split('T').next().unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(serde::de::Error::custom)
}

impl Book {
    /// Create a new available book with all lending fields cleared.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
        language: impl Into<String>,
        publication_date: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            category: category.into(),
            language: language.into(),
            publication_date: publication_date.into(),
            isbn: isbn.into(),
            is_taken: false,
            taken_by: None,
            estimated_return_date: None,
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        !self.is_taken
    }

    /// Transition `Available -> Taken`.
    pub fn set_taken(&mut self, taken_by: impl Into<String>, due: NaiveDate) {
        self.is_taken = true;
        self.taken_by = Some(taken_by.into());
        self.estimated_return_date = Some(due);
    }

    /// Transition `Taken -> Available`, clearing both lending fields.
    pub fn set_available(&mut self) {
        self.is_taken = false;
        self.taken_by = None;
        self.estimated_return_date = None;
    }

    /// Lending-state invariant: `is_taken` is false iff both lending
    /// fields are unset.
    #[must_use]
    pub const fn lending_state_consistent(&self) -> bool {
        if self.is_taken {
            self.taken_by.is_some() && self.estimated_return_date.is_some()
        } else {
            self.taken_by.is_none() && self.estimated_return_date.is_none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_book_is_available() {
        let book = Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "978-0441172719");
        assert!(book.is_available());
        assert!(book.lending_state_consistent());
    }

    #[test]
    fn test_take_then_return_restores_state() {
        let mut book = Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "1");
        let before = book.clone();

        book.set_taken("Alice", date("2026-09-10"));
        assert!(book.is_taken);
        assert_eq!(book.taken_by.as_deref(), Some("Alice"));
        assert!(book.lending_state_consistent());

        book.set_available();
        assert!(book.lending_state_consistent());
        assert_eq!(book, before);
    }

    #[test]
    fn test_serde_field_names() {
        let mut book = Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "1");
        book.set_taken("Alice", date("2026-09-10"));

        let json = serde_json::to_string(&book).unwrap();
        assert!(json.contains("\"publicationDate\""));
        assert!(json.contains("\"isTaken\":true"));
        assert!(json.contains("\"takenBy\":\"Alice\""));
        assert!(json.contains("\"estimatedReturnDate\":\"2026-09-10\""));
    }

    #[test]
    fn test_deserializes_datetime_due_date_form() {
        let json = r#"{
            "name": "Dune", "author": "Herbert", "category": "Fiction",
            "language": "EN", "publicationDate": "1965-08-01", "isbn": "1",
            "isTaken": true, "takenBy": "Alice",
            "estimatedReturnDate": "2021-03-10T00:00:00"
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.estimated_return_date, Some(date("2021-03-10")));
        assert!(book.lending_state_consistent());

        // Re-serializing normalizes to the plain date form
        let out = serde_json::to_string(&book).unwrap();
        assert!(out.contains("\"estimatedReturnDate\":\"2021-03-10\""));
    }

    #[test]
    fn test_serde_omits_unset_lending_fields() {
        let book = Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "1");
        let json = serde_json::to_string(&book).unwrap();
        assert!(!json.contains("takenBy"));
        assert!(!json.contains("estimatedReturnDate"));

        let back: Book = serde_json::from_str(&json).unwrap();
        assert!(back.lending_state_consistent());
    }
}
