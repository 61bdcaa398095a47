//! Select catalog rows by genre.
//!
//! Matching is a case-insensitive literal substring test against the raw
//! genre column, so `"sci"` matches `"Action|Sci-Fi"`. Results keep table
//! order; there is no relevance ranking.

use data_loader::{Catalog, CatalogRecord};

/// A normalized genre query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreQuery {
    needle: String,
    limit: usize,
}

impl GenreQuery {
    /// Default number of rows a query returns
    pub const DEFAULT_LIMIT: usize = 8;

    pub fn new(genre: &str, limit: usize) -> Self {
        Self {
            needle: genre.trim().to_lowercase(),
            limit,
        }
    }

    /// The lower-cased search text
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// True when the query can never match anything
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty() || self.limit == 0
    }

    /// Does this record's genre column contain the query text?
    ///
    /// Records without genres never match.
    pub fn matches(&self, record: &CatalogRecord) -> bool {
        match &record.genres {
            Some(genres) if !self.needle.is_empty() => {
                genres.to_lowercase().contains(&self.needle)
            }
            _ => false,
        }
    }

    /// First `limit` matching records, in table order
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogRecord> {
        if self.is_empty() {
            return Vec::new();
        }
        catalog
            .records()
            .iter()
            .filter(|record| self.matches(record))
            .take(self.limit)
            .collect()
    }
}

/// First `limit` records whose genres contain `genre`, ignoring case
///
/// An empty genre or a zero limit selects nothing.
pub fn filter_by_genre<'a>(
    catalog: &'a Catalog,
    genre: &str,
    limit: usize,
) -> Vec<&'a CatalogRecord> {
    let query = GenreQuery::new(genre, limit);
    let selected = query.apply(catalog);
    tracing::debug!(
        "Genre filter '{}' (limit {}) selected {} of {} movies",
        query.needle(),
        limit,
        selected.len(),
        catalog.len()
    );
    selected
}
