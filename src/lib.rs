//! # matsel
//!
//! A decision-support engine for choosing construction materials.
//!
//! Given a project specification (applications, strength, durability,
//! fire and water resistance, thermal preference, eco-friendliness,
//! budget, installation tolerance and environmental exposure), matsel
//! scores every material in a catalog, ranks them by fitness and offers
//! comparison, cost projection and "similar materials" lookups.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! matsel recommend --spec project.json --top 5
//! matsel similar --id 8 -k 3
//! matsel cost --ids 1,2,7 --area 120
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use matsel::prelude::*;
//! use std::sync::Arc;
//!
//! let recommender = Recommender::with_defaults(Arc::new(Catalog::builtin())).unwrap();
//!
//! let spec = ProjectSpecification::builder([Application::Foundation])
//!     .min_strength_mpa(50.0)
//!     .budget(150.0)
//!     .build()
//!     .unwrap();
//!
//! let top = recommender.recommend(&spec, 3);
//! assert_eq!(top.len(), 3);
//!
//! let similar = recommender.similar(8, 3).unwrap();
//! assert_eq!(similar.len(), 3);
//! ```
//!
//! ## Crate Structure
//!
//! - `matsel-core` - Material and supplier records, catalog, built-in dataset, specifications
//! - `matsel-scoring` - Criterion weights, sub-scores, ranking, explanations, comparison views
//! - `matsel-similarity` - Feature extraction, standardization, nearest-neighbor index
//! - `matsel-recommender` - Recommendation facade and optional rating regressor
//! - `matsel-storage` - JSON catalog loading, export and hot reload

// Re-export core types
pub use matsel_core::{
    Application, Catalog, EnvironmentalConditions, Error, InstallationTolerance, Material,
    MaterialType, PriceLevel, ProjectSpecification, Result, Supplier, ThermalPreference,
    WeatherCondition, WeatherResistance,
};

// Re-export scoring
pub use matsel_scoring::{
    Criterion, RankingResponse, ScoreScale, ScoredMaterial, ScoringEngine, ScoringWeights,
};

// Re-export similarity
pub use matsel_similarity::{FeatureExtractor, SimilarityIndex, StandardScaler};

// Re-export recommender
pub use matsel_recommender::{
    ForestConfig, PredictedMaterial, RatingSample, Recommender, RecommenderConfig,
    TrainingError, TrainingReport,
};

// Re-export storage
pub use matsel_storage::{CatalogSource, CatalogStore, StorageError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Application, Catalog, CatalogSource, CatalogStore, Criterion, Error, MaterialType,
        ProjectSpecification, Recommender, RecommenderConfig, Result, ScoringEngine,
        ScoringWeights, SimilarityIndex, ThermalPreference, WeatherCondition,
    };
}

/// Comparison and cost projection views
pub mod analysis {
    pub use matsel_scoring::analysis::{
        compare, cost_projection, durability_cost_points, supplier_comparison, ComparisonRow,
        CostLine, DurabilityCostPoint,
    };
}
