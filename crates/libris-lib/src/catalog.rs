//! In-memory book catalog.
//!
//! An insertion-ordered sequence of [`Book`] records. The catalog owns
//! all records; lookups hand out a reference for immediate use.

use crate::model::Book;
use crate::util::eq_ignore_case;

/// The full in-memory set of book records, listing order preserved.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Build a catalog from loaded records, keeping their order.
    #[must_use]
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Append a record. Duplicate ISBNs are permitted; lookups resolve
    /// them by taking the first match in sequence order.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Remove a record by identity. Silently a no-op when absent.
    pub fn remove(&mut self, book: &Book) {
        if let Some(pos) = self.books.iter().position(|b| b == book) {
            self.books.remove(pos);
        }
    }

    /// ISBN/availability predicate shared by the lookup operations.
    /// A record with an empty ISBN never matches.
    fn matches(book: &Book, isbn: &str, want_available: bool) -> bool {
        book.is_available() == want_available
            && !book.isbn.is_empty()
            && eq_ignore_case(&book.isbn, isbn)
    }

    /// First record with the given ISBN and availability, in catalog order.
    #[must_use]
    pub fn find_by_isbn(&self, isbn: &str, want_available: bool) -> Option<&Book> {
        self.books
            .iter()
            .find(|b| Self::matches(b, isbn, want_available))
    }

    /// Mutable variant of [`Catalog::find_by_isbn`].
    pub fn find_by_isbn_mut(&mut self, isbn: &str, want_available: bool) -> Option<&mut Book> {
        self.books
            .iter_mut()
            .find(|b| Self::matches(b, isbn, want_available))
    }

    /// True if any record matches the given ISBN and availability.
    #[must_use]
    pub fn exists_by_isbn(&self, isbn: &str, want_available: bool) -> bool {
        self.find_by_isbn(isbn, want_available).is_some()
    }

    /// True if any record at all has the given availability.
    #[must_use]
    pub fn exists_any(&self, want_available: bool) -> bool {
        self.books.iter().any(|b| b.is_available() == want_available)
    }

    /// Number of records currently held by the named person.
    #[must_use]
    pub fn count_by_person(&self, person: &str) -> usize {
        self.books
            .iter()
            .filter(|b| {
                b.taken_by
                    .as_deref()
                    .is_some_and(|holder| eq_ignore_case(holder, person))
            })
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_book(isbn: &str) -> Book {
        Book::new("Title", "Author", "Fiction", "EN", "2010-10-10", isbn)
    }

    fn taken_book(isbn: &str, person: &str) -> Book {
        let mut book = make_book(isbn);
        book.set_taken(person, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        book
    }

    #[test]
    fn test_find_by_isbn_availability_split() {
        let mut catalog = Catalog::new();
        catalog.add(make_book("1"));
        catalog.add(taken_book("2", "Alice"));

        assert!(catalog.find_by_isbn("1", true).is_some());
        assert!(catalog.find_by_isbn("1", false).is_none());
        assert!(catalog.find_by_isbn("2", false).is_some());
        assert!(catalog.find_by_isbn("2", true).is_none());
    }

    #[test]
    fn test_find_by_isbn_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.add(make_book("ISBN-42"));

        assert!(catalog.find_by_isbn("isbn-42", true).is_some());
    }

    #[test]
    fn test_duplicate_isbn_first_match_wins() {
        let mut catalog = Catalog::new();
        let mut first = make_book("1");
        first.name = "First".to_string();
        let mut second = make_book("1");
        second.name = "Second".to_string();
        catalog.add(first);
        catalog.add(second);

        let found = catalog.find_by_isbn("1", true).unwrap();
        assert_eq!(found.name, "First");
    }

    #[test]
    fn test_empty_isbn_never_matches() {
        let mut catalog = Catalog::new();
        catalog.add(make_book(""));

        assert!(!catalog.exists_by_isbn("", true));
        assert!(catalog.find_by_isbn("", true).is_none());
    }

    #[test]
    fn test_exists_any() {
        let mut catalog = Catalog::new();
        assert!(!catalog.exists_any(true));
        assert!(!catalog.exists_any(false));

        catalog.add(make_book("1"));
        assert!(catalog.exists_any(true));
        assert!(!catalog.exists_any(false));

        catalog.add(taken_book("2", "Alice"));
        assert!(catalog.exists_any(false));
    }

    #[test]
    fn test_count_by_person_case_insensitive() {
        let mut catalog = Catalog::new();
        catalog.add(taken_book("1", "Alice"));
        catalog.add(taken_book("2", "alice"));
        catalog.add(taken_book("3", "Bob"));
        catalog.add(make_book("4"));

        assert_eq!(catalog.count_by_person("ALICE"), 2);
        assert_eq!(catalog.count_by_person("Bob"), 1);
        assert_eq!(catalog.count_by_person("Carol"), 0);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut catalog = Catalog::new();
        catalog.add(make_book("1"));
        catalog.add(make_book("2"));

        let target = catalog.find_by_isbn("1", true).unwrap().clone();
        catalog.remove(&target);
        assert_eq!(catalog.len(), 1);

        // Removing again is a silent no-op
        catalog.remove(&target);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = Catalog::new();
        for isbn in ["3", "1", "2"] {
            catalog.add(make_book(isbn));
        }
        let isbns: Vec<&str> = catalog.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["3", "1", "2"]);
    }
}
