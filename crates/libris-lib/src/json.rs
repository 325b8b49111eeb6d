//! JSON file persistence for the catalog.
//!
//! The catalog is stored as a pretty-printed JSON array of book records.
//! Saves go to a temp file first and are renamed into place, so a failed
//! write never corrupts the prior snapshot.

use std::fs;
use std::path::Path;

use crate::error::{LibrisError, Result};
use crate::model::Book;

/// Load the catalog from a JSON file.
///
/// An empty file is an empty catalog.
///
/// # Errors
///
/// Returns `FileNotFound` if the file does not exist, `Io` if it cannot
/// be read, or `Json` if it cannot be parsed.
pub fn load(path: &Path) -> Result<Vec<Book>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LibrisError::FileNotFound(path.to_path_buf())
        } else {
            LibrisError::Io(e)
        }
    })?;

    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let books: Vec<Book> = serde_json::from_str(&contents)?;
    Ok(books)
}

/// Save the catalog to a JSON file with atomic replace.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written, or `Json` on
/// serialization failure.
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let json = serde_json::to_string_pretty(books)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");

        let mut taken = Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "1");
        taken.set_taken("Alice", NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        let books = vec![
            taken,
            Book::new("SICP", "Abelson", "CS", "EN", "1985-01-01", "2"),
        ];

        save(&path, &books).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, books);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("/nonexistent/books.json"));
        assert!(matches!(result, Err(LibrisError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "").unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(LibrisError::Json(_))));
    }

    #[test]
    fn test_failed_save_keeps_prior_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        let books = vec![Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "1")];
        save(&path, &books).unwrap();

        // A save to an unwritable location must not touch the original.
        let bad = Path::new("/nonexistent/dir/books.json");
        assert!(save(bad, &[]).is_err());
        assert_eq!(load(&path).unwrap(), books);
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the target path makes the rename fail after the
        // temp file was written.
        let path = dir.path().join("books.json");
        fs::create_dir(&path).unwrap();

        let books = vec![Book::new("Dune", "Herbert", "Fiction", "EN", "1965-08-01", "1")];
        assert!(save(&path, &books).is_err());
        assert!(!dir.path().join("books.json.tmp").exists());
    }

    #[test]
    fn test_loads_existing_camel_case_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        fs::write(
            &path,
            r#"[{
                "name": "Dune",
                "author": "Herbert",
                "category": "Fiction",
                "language": "EN",
                "publicationDate": "1965-08-01",
                "isbn": "1",
                "isTaken": true,
                "takenBy": "Alice",
                "estimatedReturnDate": "2026-09-01"
            }]"#,
        )
        .unwrap();

        let books = load(&path).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].taken_by.as_deref(), Some("Alice"));
        assert!(books[0].lending_state_consistent());
    }
}
