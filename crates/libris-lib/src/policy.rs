//! Lending policy: gates and executes checkout/return/delete transitions.
//!
//! The policy is clock-free; callers pass `today` in, so every rule is
//! testable with a fixed date.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{LibrisError, Result};
use crate::model::Book;
use crate::util::eq_ignore_case;

/// Borrowing limits, injected at construction so the policy is testable
/// with varied limits.
#[derive(Debug, Clone, Copy)]
pub struct LendingLimits {
    /// Maximum number of books one person may hold at once.
    pub max_books_per_person: usize,
    /// Maximum loan period in days.
    pub max_loan_days: i64,
}

impl Default for LendingLimits {
    fn default() -> Self {
        Self {
            max_books_per_person: 3,
            max_loan_days: 60,
        }
    }
}

/// Outcome of a successful return. `late` is a reporting distinction,
/// not a different state transition.
#[derive(Debug, Clone)]
pub struct ReturnReceipt {
    /// The record after clearing its lending fields.
    pub book: Book,
    /// True when the book came back after its due date.
    pub late: bool,
}

/// Enforces borrowing constraints and performs circulation transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct LendingPolicy {
    limits: LendingLimits,
}

impl LendingPolicy {
    #[must_use]
    pub const fn new(limits: LendingLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn limits(&self) -> &LendingLimits {
        &self.limits
    }

    /// Check a book out to `person` for `days` days.
    ///
    /// Returns the updated record.
    ///
    /// # Errors
    ///
    /// `NoAvailableBooks` when nothing is available system-wide,
    /// `PersonAtCap` when the person already holds the maximum,
    /// `LoanTooLong` unless `0 < days <= max_loan_days`, and
    /// `BookNotAvailable` when no available record matches the ISBN.
    pub fn checkout(
        &self,
        catalog: &mut Catalog,
        isbn: &str,
        person: &str,
        days: i64,
        today: NaiveDate,
    ) -> Result<Book> {
        if !catalog.exists_any(true) {
            return Err(LibrisError::NoAvailableBooks);
        }
        if catalog.count_by_person(person) >= self.limits.max_books_per_person {
            return Err(LibrisError::PersonAtCap {
                person: person.to_string(),
                limit: self.limits.max_books_per_person,
            });
        }
        if days < 1 || days > self.limits.max_loan_days {
            return Err(LibrisError::LoanTooLong {
                days,
                max: self.limits.max_loan_days,
            });
        }

        let book = catalog
            .find_by_isbn_mut(isbn, true)
            .ok_or_else(|| LibrisError::BookNotAvailable {
                isbn: isbn.to_string(),
            })?;

        book.set_taken(person, today + Duration::days(days));
        debug_assert!(book.lending_state_consistent());
        debug!(isbn, person, days, "book checked out");
        Ok(book.clone())
    }

    /// Return a taken book, clearing its lending fields.
    ///
    /// # Errors
    ///
    /// `NoTakenBooks` when nothing is out on loan, `BookNotTaken` when no
    /// taken record matches the ISBN, and `WrongBorrower` when `person`
    /// is not the recorded holder (compared case-insensitively).
    pub fn return_book(
        &self,
        catalog: &mut Catalog,
        isbn: &str,
        person: &str,
        today: NaiveDate,
    ) -> Result<ReturnReceipt> {
        if !catalog.exists_any(false) {
            return Err(LibrisError::NoTakenBooks);
        }

        let book = catalog
            .find_by_isbn_mut(isbn, false)
            .ok_or_else(|| LibrisError::BookNotTaken {
                isbn: isbn.to_string(),
            })?;

        let holder = book.taken_by.as_deref().unwrap_or_default();
        if !eq_ignore_case(holder, person) {
            return Err(LibrisError::WrongBorrower {
                isbn: isbn.to_string(),
                person: person.to_string(),
            });
        }

        let late = book.estimated_return_date.is_some_and(|due| today > due);
        book.set_available();
        debug_assert!(book.lending_state_consistent());
        debug!(isbn, person, late, "book returned");
        Ok(ReturnReceipt {
            book: book.clone(),
            late,
        })
    }

    /// Permanently remove an available book from the catalog. Deletion of
    /// taken books is disallowed by design.
    ///
    /// # Errors
    ///
    /// `NoAvailableBooks` when nothing is available system-wide, and
    /// `BookNotAvailable` when no available record matches the ISBN.
    pub fn delete(&self, catalog: &mut Catalog, isbn: &str) -> Result<Book> {
        if !catalog.exists_any(true) {
            return Err(LibrisError::NoAvailableBooks);
        }

        let book = catalog
            .find_by_isbn(isbn, true)
            .cloned()
            .ok_or_else(|| LibrisError::BookNotAvailable {
                isbn: isbn.to_string(),
            })?;

        catalog.remove(&book);
        debug!(isbn, "book deleted");
        Ok(book)
    }
}
