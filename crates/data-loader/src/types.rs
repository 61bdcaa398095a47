//! Core domain types for the movie catalog.
//!
//! The catalog is a flat, ordered table of `(id, title, genres)` rows read
//! from a `movies.dat`-style file. Row order is the file order and is
//! significant: genre queries return matches in table order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{DataLoadError, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (the TMDB id for catalogs built from TMDB)
pub type MovieId = u32;

// =============================================================================
// Records
// =============================================================================

/// One row of the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: MovieId,
    pub title: String,
    /// Free-form genre tags, e.g. `"Action|Adventure|Sci-Fi"`.
    ///
    /// `None` when the column is missing or empty. Such rows never match a
    /// genre query.
    pub genres: Option<String>,
}

impl CatalogRecord {
    pub fn new(id: MovieId, title: impl Into<String>, genres: Option<&str>) -> Self {
        Self {
            id,
            title: title.into(),
            genres: genres.filter(|g| !g.is_empty()).map(str::to_string),
        }
    }
}

// =============================================================================
// Load options
// =============================================================================

/// Text encoding of the catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// ISO-8859-1, the encoding of the MovieLens `.dat` files
    #[default]
    Latin1,
    Utf8,
}

impl std::str::FromStr for Encoding {
    type Err = DataLoadError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Encoding::Latin1),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            _ => Err(DataLoadError::InvalidValue {
                field: "encoding".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Everything needed to read a catalog file.
///
/// Two loads with equal options are interchangeable, which is what
/// [`crate::CatalogStore`] keys its memoization on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadOptions {
    pub path: PathBuf,
    pub delimiter: String,
    pub encoding: Encoding,
}

impl LoadOptions {
    pub const DEFAULT_DELIMITER: &'static str = "::";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: Self::DEFAULT_DELIMITER.to_string(),
            encoding: Encoding::default(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

// =============================================================================
// Catalog - the in-memory table
// =============================================================================

/// Ordered, read-only table of catalog records.
///
/// Records keep file order; `by_id` maps an id to its position so lookups
/// by id are O(1) without disturbing that order.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) records: Vec<CatalogRecord>,
    pub(crate) by_id: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records in order, rejecting duplicate ids
    pub fn from_records(records: impl IntoIterator<Item = CatalogRecord>) -> Result<Self> {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record)?;
        }
        Ok(catalog)
    }

    /// Append a record at the end of the table
    pub fn insert(&mut self, record: CatalogRecord) -> Result<()> {
        if self.by_id.contains_key(&record.id) {
            return Err(DataLoadError::DuplicateMovie { id: record.id });
        }
        self.by_id.insert(record.id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// All records in table order
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Get a record by ID
    pub fn get(&self, id: MovieId) -> Option<&CatalogRecord> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_genres_become_none() {
        let record = CatalogRecord::new(1, "Toy Story (1995)", Some(""));
        assert_eq!(record.genres, None);

        let record = CatalogRecord::new(1, "Toy Story (1995)", Some("Animation"));
        assert_eq!(record.genres.as_deref(), Some("Animation"));
    }

    #[test]
    fn test_parse_encoding() {
        assert_eq!("ISO-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("utf8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert!("ebcdic".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(CatalogRecord::new(1, "A", None)).unwrap();

        let err = catalog.insert(CatalogRecord::new(1, "B", None)).unwrap_err();
        assert!(matches!(err, DataLoadError::DuplicateMovie { id: 1 }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_order_is_preserved() {
        let catalog = Catalog::from_records(vec![
            CatalogRecord::new(30, "C", None),
            CatalogRecord::new(10, "A", None),
            CatalogRecord::new(20, "B", None),
        ])
        .unwrap();

        let ids: Vec<MovieId> = catalog.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(catalog.get(10).unwrap().title, "A");
        assert!(catalog.get(99).is_none());
    }
}
