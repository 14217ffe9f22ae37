//! Catalog loading and export
//!
//! A catalog comes either from the built-in dataset or from a JSON file
//! holding `{"materials": [...], "suppliers": [...]}`. Loading can fall
//! back to the built-in dataset when the configured source is unusable.

use crate::error::StorageError;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use matsel_core::{Catalog, CatalogData};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Builtin,
    JsonFile(PathBuf),
}

impl CatalogSource {
    /// `JsonFile` when a path is given, `Builtin` otherwise
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(CatalogSource::Builtin, CatalogSource::JsonFile)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "built-in catalog"),
            CatalogSource::JsonFile(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load and validate a catalog
pub fn load_catalog(source: &CatalogSource) -> Result<Catalog, StorageError> {
    let path = match source {
        CatalogSource::Builtin => return Ok(Catalog::builtin()),
        CatalogSource::JsonFile(path) => path,
    };

    let json = std::fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    let data: CatalogData = serde_json::from_str(&json)?;
    let catalog = Catalog::new(data.materials, data.suppliers)?;

    tracing::info!(
        source = %source,
        materials = catalog.len(),
        suppliers = catalog.suppliers().len(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Load a catalog, falling back to the built-in dataset on any failure
pub fn load_catalog_or_builtin(source: &CatalogSource) -> Catalog {
    match load_catalog(source) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!(source = %source, error = %e, "using built-in catalog");
            Catalog::builtin()
        }
    }
}

/// Write `catalog` as pretty JSON, replacing `path` atomically
pub fn export_catalog(catalog: &Catalog, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(catalog)?;

    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| f.write_all(&json))
        .map_err(|e| {
            let source = match e {
                atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
            };
            StorageError::io(path, source)
        })?;

    tracing::info!(path = %path.display(), materials = catalog.len(), "exported catalog");
    Ok(())
}
