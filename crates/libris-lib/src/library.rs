//! Facade tying the catalog, the lending policy, and the on-disk file.
//!
//! Every mutating operation persists the full catalog snapshot right
//! after the in-memory change succeeds. A save failure is reported as a
//! storage error while the in-memory change is kept; callers should warn
//! that the change may not be durable.
//!
//! Not safe for concurrent mutation from multiple callers without
//! external synchronization.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{LibrisError, Result};
use crate::json;
use crate::model::Book;
use crate::policy::{LendingPolicy, ReturnReceipt};
use crate::util::is_valid_date;

/// A book library with circulation rules and file-backed persistence.
pub struct Library {
    catalog: Catalog,
    policy: LendingPolicy,
    file_path: Option<PathBuf>,
}

impl Library {
    /// Create an empty, unpersisted library.
    #[must_use]
    pub fn new(policy: LendingPolicy) -> Self {
        Self {
            catalog: Catalog::new(),
            policy,
            file_path: None,
        }
    }

    /// Open a library from a catalog file.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>, policy: LendingPolicy) -> Result<Self> {
        let path = path.as_ref();
        let books = json::load(path)?;
        debug!(count = books.len(), path = %path.display(), "catalog loaded");
        Ok(Self {
            catalog: Catalog::from_books(books),
            policy,
            file_path: Some(path.to_path_buf()),
        })
    }

    /// Set where mutating operations persist the catalog.
    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    /// Save to the file this library was opened from.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if no file path is set, or an I/O error on
    /// write failure.
    pub fn save(&self) -> Result<()> {
        let path = self
            .file_path
            .as_ref()
            .ok_or_else(|| LibrisError::Storage("no file path set; use save_to()".to_string()))?;
        json::save(path, self.catalog.books())
    }

    /// Save to a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error on write failure.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        json::save(path.as_ref(), self.catalog.books())
    }

    /// Add a new book and persist.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the publication date is not strict
    /// `yyyy-MM-dd`, or a storage error if persisting fails.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        if !is_valid_date(&book.publication_date) {
            return Err(LibrisError::validation(
                "publicationDate",
                "expected yyyy-MM-dd",
            ));
        }
        self.catalog.add(book);
        self.persist()
    }

    /// Check a book out and persist. See [`LendingPolicy::checkout`].
    ///
    /// # Errors
    ///
    /// Propagates policy violations, or a storage error if persisting
    /// fails after the in-memory mutation.
    pub fn checkout(
        &mut self,
        isbn: &str,
        person: &str,
        days: i64,
        today: NaiveDate,
    ) -> Result<Book> {
        let book = self
            .policy
            .checkout(&mut self.catalog, isbn, person, days, today)?;
        self.persist()?;
        Ok(book)
    }

    /// Return a taken book and persist. See [`LendingPolicy::return_book`].
    ///
    /// # Errors
    ///
    /// Propagates policy violations, or a storage error if persisting
    /// fails after the in-memory mutation.
    pub fn return_book(
        &mut self,
        isbn: &str,
        person: &str,
        today: NaiveDate,
    ) -> Result<ReturnReceipt> {
        let receipt = self
            .policy
            .return_book(&mut self.catalog, isbn, person, today)?;
        self.persist()?;
        Ok(receipt)
    }

    /// Delete an available book and persist. See [`LendingPolicy::delete`].
    ///
    /// # Errors
    ///
    /// Propagates policy violations, or a storage error if persisting
    /// fails after the in-memory mutation.
    pub fn delete_book(&mut self, isbn: &str) -> Result<Book> {
        let book = self.policy.delete(&mut self.catalog, isbn)?;
        self.persist()?;
        Ok(book)
    }

    fn persist(&self) -> Result<()> {
        if let Some(path) = &self.file_path {
            json::save(path, self.catalog.books())?;
            debug!(path = %path.display(), count = self.catalog.len(), "catalog saved");
        }
        Ok(())
    }
}
