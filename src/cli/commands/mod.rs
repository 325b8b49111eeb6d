//! Command implementations.
//!
//! Each command opens the library from the catalog file, prompts for what
//! it needs, and lets the library persist after the mutation. Policy
//! violations are reported to the operator (re-prompting where the rules
//! call for it); storage failures abort the command with a durability
//! warning.

pub mod add;
pub mod delete;
pub mod list;
pub mod return_book;
pub mod shell;
pub mod take;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use libris_lib::{LendingPolicy, Library, LibrisError};

/// Open the library, starting empty when the catalog file does not exist
/// yet (it is created on first save). Any other load failure is fatal.
pub(crate) fn open_library(path: &Path) -> Result<Library> {
    match Library::open(path, LendingPolicy::default()) {
        Ok(library) => Ok(library),
        Err(LibrisError::FileNotFound(_)) => {
            let mut library = Library::new(LendingPolicy::default());
            library.set_file_path(path);
            Ok(library)
        }
        Err(e) => Err(e.into()),
    }
}

/// Report a failed save after a successful in-memory mutation, then
/// propagate the storage error.
pub(crate) fn fail_not_durable(out: &mut impl Write, e: LibrisError) -> Result<()> {
    writeln!(
        out,
        "Warning: the catalog changed in memory but could not be saved."
    )?;
    Err(e.into())
}
