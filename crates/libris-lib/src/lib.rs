//! `libris-lib` — In-process library catalog and circulation engine.
//!
//! Tracks a small library's book inventory and lending state, persisted
//! as a JSON array of records. The circulation rules (who may borrow,
//! how many books, for how long, and how books come back) live in
//! [`LendingPolicy`]; [`Library`] ties the in-memory [`Catalog`] to a
//! file and persists after every mutation.
//!
//! Not safe for concurrent mutation from multiple callers without
//! external synchronization.
//!
//! # Quick Start
//!
//! ```no_run
//! use chrono::Local;
//! use libris_lib::{Book, LendingPolicy, Library};
//!
//! let mut library = Library::open("books.json", LendingPolicy::default()).unwrap();
//!
//! library.add_book(Book::new(
//!     "Dune", "Frank Herbert", "Fiction", "EN", "1965-08-01", "978-0441172719",
//! )).unwrap();
//!
//! let today = Local::now().date_naive();
//! library.checkout("978-0441172719", "Alice", 14, today).unwrap();
//! let receipt = library.return_book("978-0441172719", "alice", today).unwrap();
//! assert!(!receipt.late);
//! ```

pub mod catalog;
pub mod error;
pub mod json;
pub mod library;
pub mod model;
pub mod policy;
pub mod query;
pub mod util;

pub use catalog::Catalog;
pub use error::{LibrisError, Result};
pub use library::Library;
pub use model::Book;
pub use policy::{LendingLimits, LendingPolicy, ReturnReceipt};
pub use query::{FilterMode, filter};
