//! # matsel Recommender
//!
//! Facade over the scoring engine and similarity index, plus an opt-in
//! random-forest rating regressor.
//!
//! The default path is deterministic weighted scoring. The regressor is
//! unused until [`Recommender::train`] is given enough rating samples,
//! and its output is reported separately from the weighted ranking.
//!
//! ```rust
//! use std::sync::Arc;
//! use matsel_core::{Application, Catalog, ProjectSpecification};
//! use matsel_recommender::Recommender;
//!
//! let recommender = Recommender::with_defaults(Arc::new(Catalog::builtin())).unwrap();
//! let spec = ProjectSpecification::builder([Application::Roofing]).build().unwrap();
//!
//! let top = recommender.recommend(&spec, 3);
//! assert_eq!(top.len(), 3);
//! assert!(!recommender.is_trained());
//! ```

pub mod config;
pub mod error;
pub mod forest;
pub mod recommender;

pub use config::{ForestConfig, RecommenderConfig};
pub use error::TrainingError;
pub use forest::{RatingForest, RegressionTree};
pub use recommender::{PredictedMaterial, RatingSample, Recommender, TrainingReport};
