//! Read-only catalog filtering.

use crate::catalog::Catalog;
use crate::model::Book;
use crate::util::eq_ignore_case;

/// Which subset of the catalog to select.
///
/// Field modes compare a user-supplied value against the corresponding
/// record field; the availability modes need no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    Author,
    Category,
    Language,
    Isbn,
    Name,
    Taken,
    Available,
    /// Identity filter: the full catalog.
    #[default]
    All,
}

impl FilterMode {
    /// Parse a filter code. Accepts the menu's short codes and long
    /// names; anything unrecognized (including blank) is the identity
    /// filter.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "a" | "author" => Self::Author,
            "c" | "category" => Self::Category,
            "l" | "language" => Self::Language,
            "i" | "isbn" => Self::Isbn,
            "n" | "name" => Self::Name,
            "t" | "taken" => Self::Taken,
            "av" | "available" => Self::Available,
            _ => Self::All,
        }
    }

    /// Whether this mode compares against a user-supplied value.
    #[must_use]
    pub const fn needs_value(self) -> bool {
        matches!(
            self,
            Self::Author | Self::Category | Self::Language | Self::Isbn | Self::Name
        )
    }
}

/// Select records matching the mode, in catalog order. Never mutates.
///
/// Field modes match by exact case-insensitive equality and return
/// nothing when `value` is empty.
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, mode: FilterMode, value: &str) -> Vec<&'a Book> {
    match mode {
        FilterMode::Author => by_field(catalog, value, |b| &b.author),
        FilterMode::Category => by_field(catalog, value, |b| &b.category),
        FilterMode::Language => by_field(catalog, value, |b| &b.language),
        FilterMode::Isbn => by_field(catalog, value, |b| &b.isbn),
        FilterMode::Name => by_field(catalog, value, |b| &b.name),
        FilterMode::Taken => catalog.iter().filter(|b| b.is_taken).collect(),
        FilterMode::Available => catalog.iter().filter(|b| b.is_available()).collect(),
        FilterMode::All => catalog.iter().collect(),
    }
}

fn by_field<'a>(
    catalog: &'a Catalog,
    value: &str,
    field: impl Fn(&Book) -> &str,
) -> Vec<&'a Book> {
    if value.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|b| eq_ignore_case(field(b), value))
        .collect()
}
