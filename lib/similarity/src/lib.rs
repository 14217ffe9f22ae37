//! # matsel Similarity
//!
//! Feature extraction and "similar materials" lookup for the matsel
//! catalog.
//!
//! ## Features
//!
//! - **Feature Extraction**: numeric, weather, one-hot type and multi-hot
//!   application columns derived from the catalog
//! - **Standardization**: per-column mean / population std scaling
//! - **Nearest Neighbors**: brute-force Euclidean kNN with a deterministic
//!   tie-break on material ID
//! - **Project Encoding**: fixed-width rows for project specifications
//!
//! ## Example
//!
//! ```rust
//! use matsel_core::Catalog;
//! use matsel_similarity::SimilarityIndex;
//!
//! let catalog = Catalog::builtin();
//! let index = SimilarityIndex::build(catalog.materials()).unwrap();
//!
//! let similar = index.nearest(8, 3).unwrap();
//! assert_eq!(similar.len(), 3);
//! assert!(!similar.contains(&8));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│  Extractor  │────>│   Scaler    │
//! │ (materials) │     │ (rows)      │     │ (z-scores)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │    Index    │
//!                                         │   (kNN)     │
//!                                         └─────────────┘
//! ```

pub mod features;
pub mod index;
pub mod project_features;
pub mod scaler;

pub use features::{FeatureExtractor, NUMERIC_COLUMNS};
pub use index::SimilarityIndex;
pub use project_features::{project_columns, project_feature_row, PROJECT_FEATURE_DIM};
pub use scaler::StandardScaler;
