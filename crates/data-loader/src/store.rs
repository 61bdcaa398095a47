//! Load-once catalog store.
//!
//! A catalog is read at most once per set of [`LoadOptions`] and then shared
//! as an `Arc<Catalog>`. The store lock is held for the duration of a load,
//! so the load completes before any caller sees the handle and two callers
//! racing on first access cannot both read the file.

use crate::error::Result;
use crate::types::{Catalog, LoadOptions};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
pub struct CatalogStore {
    loaded: Mutex<HashMap<LoadOptions, Arc<Catalog>>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the catalog for `options`, loading it on first use
    ///
    /// Failed loads are not remembered; the next call retries.
    pub fn get_or_load(&self, options: &LoadOptions) -> Result<Arc<Catalog>> {
        let mut loaded = self.loaded.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(catalog) = loaded.get(options) {
            debug!(path = %options.path.display(), "Catalog already loaded");
            return Ok(Arc::clone(catalog));
        }

        let catalog = Arc::new(Catalog::load(options)?);
        loaded.insert(options.clone(), Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Number of distinct catalogs held
    pub fn len(&self) -> usize {
        self.loaded.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Encoding;
    use std::io::Write;
    use std::thread;
    use tempfile::NamedTempFile;

    fn write_catalog(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_same_options_share_one_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.dat");
        std::fs::write(&path, b"1::A::Drama\n").unwrap();
        let store = CatalogStore::new();
        let options = LoadOptions::new(&path);

        let first = store.get_or_load(&options).unwrap();
        // Removing the file proves the second call never touches disk
        std::fs::remove_file(&path).unwrap();
        let second = store.get_or_load(&options).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_different_options_load_separately() {
        let file = write_catalog(b"1::A::Drama\n");
        let store = CatalogStore::new();

        let latin1 = store.get_or_load(&LoadOptions::new(file.path())).unwrap();
        let utf8 = store
            .get_or_load(&LoadOptions::new(file.path()).with_encoding(Encoding::Utf8))
            .unwrap();

        assert!(!Arc::ptr_eq(&latin1, &utf8));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_failed_load_not_cached() {
        let store = CatalogStore::new();
        let options = LoadOptions::new("/definitely/not/here/movies.dat");

        assert!(store.get_or_load(&options).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_first_access() {
        let file = write_catalog(b"1::A::Drama\n2::B::Comedy\n");
        let store = Arc::new(CatalogStore::new());
        let options = LoadOptions::new(file.path());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let options = options.clone();
                thread::spawn(move || store.get_or_load(&options).unwrap())
            })
            .collect();
        let catalogs: Vec<Arc<Catalog>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(catalogs.iter().all(|c| Arc::ptr_eq(c, &catalogs[0])));
        assert_eq!(catalogs[0].len(), 2);
    }
}
