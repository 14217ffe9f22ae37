//! Recommender configuration
//!
//! Plain serde structs; every field has a default so a partial JSON
//! document is a valid config.

use matsel_scoring::{ScoreScale, ScoringWeights};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecommenderConfig {
    pub weights: ScoringWeights,
    pub score_scale: ScoreScale,
    /// Result count used by `recommend_default`
    pub default_top_n: usize,
    pub forest: ForestConfig,
    pub min_training_samples: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            score_scale: ScoreScale::Raw,
            default_top_n: 10,
            forest: ForestConfig::default(),
            min_training_samples: 5,
        }
    }
}

impl RecommenderConfig {
    pub fn from_json(json: &str) -> matsel_core::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> matsel_core::Result<()> {
        self.weights.validate()?;
        self.forest.validate()
    }
}

/// Bagged regression-tree settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForestConfig {
    pub n_trees: usize,
    pub max_depth: usize,
    /// Nodes with fewer samples become leaves
    pub min_samples_split: usize,
    /// Tree `i` draws from a generator seeded with `seed + i`
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 8,
            min_samples_split: 2,
            seed: 42,
        }
    }
}

impl ForestConfig {
    pub fn validate(&self) -> matsel_core::Result<()> {
        if self.n_trees == 0 {
            return Err(matsel_core::Error::invalid_argument("forest.n_trees must be > 0"));
        }
        if self.min_samples_split < 2 {
            return Err(matsel_core::Error::invalid_argument(
                "forest.min_samples_split must be >= 2",
            ));
        }
        Ok(())
    }
}
