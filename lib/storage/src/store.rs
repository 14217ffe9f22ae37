use crate::error::StorageError;
use crate::loader::{load_catalog, load_catalog_or_builtin, CatalogSource};
use matsel_core::Catalog;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared catalog handle with copy-and-swap replacement
///
/// Readers take an `Arc` snapshot and keep using it for as long as they
/// like; a replacement swaps the whole catalog, so no reader ever sees a
/// partially updated table.
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Open `source`, falling back to the built-in catalog
    pub fn open(source: &CatalogSource) -> Self {
        Self::new(load_catalog_or_builtin(source))
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }

    /// Swap in `catalog`, returning the previous one
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Load `source` and swap it in
    ///
    /// On failure the current catalog stays in place.
    pub fn reload(&self, source: &CatalogSource) -> Result<Arc<Catalog>, StorageError> {
        let catalog = load_catalog(source).map_err(|e| {
            tracing::warn!(source = %source, error = %e, "catalog reload failed, keeping current");
            e
        })?;
        self.replace(catalog);
        Ok(self.snapshot())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::export_catalog;
    use tempfile::tempdir;

    fn small_catalog(n: usize) -> Catalog {
        let builtin = Catalog::builtin();
        Catalog::new(builtin.materials()[..n].to_vec(), Vec::new()).unwrap()
    }

    #[test]
    fn test_replace_keeps_old_snapshots() {
        let store = CatalogStore::default();
        let before = store.snapshot();

        let previous = store.replace(small_catalog(2));
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.len(), 15);
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        export_catalog(&small_catalog(4), &path).unwrap();

        let store = CatalogStore::default();
        let reloaded = store.reload(&CatalogSource::JsonFile(path)).unwrap();
        assert_eq!(reloaded.len(), 4);
        assert_eq!(store.snapshot().len(), 4);
    }

    #[test]
    fn test_failed_reload_keeps_current() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(small_catalog(3));
        let before = store.snapshot();

        let result = store.reload(&CatalogSource::JsonFile(dir.path().join("missing.json")));
        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_concurrent_readers() {
        let store = Arc::new(CatalogStore::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = store.snapshot();
                        assert!(snapshot.len() == 15 || snapshot.len() == 2);
                        if i == 0 {
                            store.replace(small_catalog(2));
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.snapshot().len(), 2);
    }
}
