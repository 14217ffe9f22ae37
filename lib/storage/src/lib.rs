pub mod error;
pub mod loader;
pub mod store;

pub use error::StorageError;
pub use loader::{export_catalog, load_catalog, load_catalog_or_builtin, CatalogSource};
pub use store::CatalogStore;
