//! # Data Loader Crate
//!
//! This crate loads the movie catalog: a flat `movies.dat`-style file of
//! `id::title::genres` rows, held in memory as an ordered table.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogRecord, Catalog, LoadOptions)
//! - **parser**: Decode and parse catalog files into records
//! - **index**: `Catalog::load`, reading a file into the table
//! - **store**: Load-once memoization shared across callers
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{CatalogStore, LoadOptions};
//!
//! let store = CatalogStore::new();
//! let catalog = store.get_or_load(&LoadOptions::new("data/movies.dat"))?;
//!
//! let movie = catalog.get(1).unwrap();
//! println!("{} [{:?}]", movie.title, movie.genres);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use store::CatalogStore;
pub use types::{
    // Type aliases
    MovieId,
    // Core types
    Catalog,
    CatalogRecord,
    LoadOptions,
    // Enums
    Encoding,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_insert_movie() {
        let mut catalog = Catalog::new();

        catalog
            .insert(CatalogRecord::new(
                1,
                "Toy Story (1995)",
                Some("Animation|Children's|Comedy"),
            ))
            .unwrap();

        let retrieved = catalog.get(1).unwrap();
        assert_eq!(retrieved.id, 1);
        assert_eq!(retrieved.title, "Toy Story (1995)");
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();
        assert!(catalog.get(999).is_none());
        assert!(catalog.records().is_empty());
    }

    #[test]
    fn test_default_options() {
        let options = LoadOptions::new("data/movies.dat");
        assert_eq!(options.delimiter, "::");
        assert_eq!(options.encoding, Encoding::Latin1);
    }
}
