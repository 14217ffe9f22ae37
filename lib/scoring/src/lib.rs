//! # matsel Scoring
//!
//! Weighted multi-criteria scoring of construction materials against a
//! project specification.
//!
//! ## Features
//!
//! - **Criterion weights**: a declarative weight table with overrides
//! - **Sub-scores**: per-criterion 0-10 fitness, each gated by whether the
//!   specification activates it
//! - **Ranking**: stable descending sort by normalized total
//! - **Explainability**: per-criterion contribution breakdown
//! - **Analysis views**: side-by-side comparison and cost projection
//!
//! ## Example
//!
//! ```rust
//! use matsel_core::{Application, Catalog, ProjectSpecification};
//! use matsel_scoring::ScoringEngine;
//!
//! let catalog = Catalog::builtin();
//! let spec = ProjectSpecification::builder([Application::Foundation])
//!     .min_strength_mpa(50.0)
//!     .budget(150.0)
//!     .build()
//!     .unwrap();
//!
//! let ranked = ScoringEngine::default().score(catalog.materials(), &spec);
//! assert_eq!(ranked.len(), 15);
//! assert!(ranked[0].total_score >= ranked[1].total_score);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Spec     │────>│  Criteria   │────>│   Engine    │
//! │ (required)  │     │ (sub-score) │     │ (weighted)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │   Explain   │
//!                                         │  (ranking)  │
//!                                         └─────────────┘
//! ```

pub mod analysis;
pub mod criteria;
pub mod engine;
pub mod explain;
pub mod weights;

pub use analysis::{
    compare, cost_projection, durability_cost_points, supplier_comparison, ComparisonRow,
    CostLine, DurabilityCostPoint,
};
pub use engine::{ScoredMaterial, ScoringEngine, SubScores};
pub use explain::{ExplainedMaterial, RankingResponse, RankingStats};
pub use weights::{Criterion, ScoreScale, ScoringWeights};
