//! Recommender facade
//!
//! Owns the scoring engine, the similarity index and the optional rating
//! regressor for one frozen catalog.

use crate::config::RecommenderConfig;
use crate::error::TrainingError;
use crate::forest::RatingForest;
use matsel_core::{Catalog, Material, ProjectSpecification, Result};
use matsel_scoring::{RankingResponse, ScoredMaterial, ScoringEngine};
use matsel_similarity::{project_feature_row, SimilarityIndex};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One observed rating of a material for a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingSample {
    pub spec: ProjectSpecification,
    pub material_id: u32,
    pub rating: f64,
}

/// Summary of a successful training run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrainingReport {
    pub samples: usize,
    pub n_trees: usize,
    pub n_features: usize,
    /// Root mean squared error on the training samples
    pub training_rmse: f64,
}

/// A material with its regressor output
#[derive(Debug, Clone, Serialize)]
pub struct PredictedMaterial<'a> {
    pub material: &'a Material,
    pub predicted_rating: f64,
}

pub struct Recommender {
    catalog: Arc<Catalog>,
    config: RecommenderConfig,
    engine: ScoringEngine,
    index: SimilarityIndex,
    model: Option<RatingForest>,
}

impl Recommender {
    /// Build the scoring engine and similarity index for `catalog`
    pub fn new(catalog: Arc<Catalog>, config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        let engine = ScoringEngine::new(config.weights)?.with_scale(config.score_scale);
        let index = SimilarityIndex::build(catalog.materials())?;

        tracing::info!(
            materials = catalog.len(),
            features = index.extractor().dim(),
            "recommender ready"
        );

        Ok(Self {
            catalog,
            config,
            engine,
            index,
            model: None,
        })
    }

    pub fn with_defaults(catalog: Arc<Catalog>) -> Result<Self> {
        Self::new(catalog, RecommenderConfig::default())
    }

    /// Top `n` materials by weighted score
    ///
    /// Returns the whole ranking when `n` exceeds the catalog size.
    pub fn recommend(&self, spec: &ProjectSpecification, n: usize) -> Vec<ScoredMaterial<'_>> {
        let mut ranked = self.engine.score(self.catalog.materials(), spec);
        ranked.truncate(n);
        ranked
    }

    pub fn recommend_default(&self, spec: &ProjectSpecification) -> Vec<ScoredMaterial<'_>> {
        self.recommend(spec, self.config.default_top_n)
    }

    /// Top `n` with per-criterion explanations and ranking stats
    pub fn recommend_explained(
        &self,
        spec: &ProjectSpecification,
        n: usize,
        include_material: bool,
    ) -> RankingResponse {
        let ranked = self.recommend(spec, n);
        RankingResponse::from_ranked(
            &ranked,
            self.engine.weights(),
            self.catalog.len(),
            include_material,
        )
    }

    /// The `k` most similar materials to `material_id`, closest first
    pub fn similar(&self, material_id: u32, k: usize) -> Result<Vec<&Material>> {
        self.index
            .nearest(material_id, k)?
            .into_iter()
            .map(|id| self.catalog.material(id))
            .collect()
    }

    /// Fit the rating regressor on `history`
    ///
    /// On any error the previous model, if any, is kept.
    pub fn train(
        &mut self,
        history: &[RatingSample],
    ) -> std::result::Result<TrainingReport, TrainingError> {
        let required = self.config.min_training_samples;
        if history.len() < required {
            tracing::warn!(
                required,
                actual = history.len(),
                "not enough rating samples to train"
            );
            return Err(TrainingError::InsufficientData {
                required,
                actual: history.len(),
            });
        }

        let mut rows = Vec::with_capacity(history.len());
        let mut targets = Vec::with_capacity(history.len());
        for sample in history {
            if !sample.rating.is_finite() || !(0.0..=10.0).contains(&sample.rating) {
                return Err(TrainingError::InvalidRating(sample.rating));
            }
            let row = self
                .feature_row(&sample.spec, sample.material_id)
                .ok_or(TrainingError::UnknownMaterial(sample.material_id))?;
            rows.push(row);
            targets.push(sample.rating);
        }

        let forest = RatingForest::fit(&rows, &targets, &self.config.forest)?;

        let squared_error: f64 = rows
            .iter()
            .zip(&targets)
            .map(|(row, target)| (forest.predict(row) - target).powi(2))
            .sum();
        let report = TrainingReport {
            samples: history.len(),
            n_trees: forest.n_trees(),
            n_features: forest.n_features(),
            training_rmse: (squared_error / history.len() as f64).sqrt(),
        };

        tracing::info!(
            samples = report.samples,
            trees = report.n_trees,
            rmse = report.training_rmse,
            "trained rating model"
        );

        self.model = Some(forest);
        Ok(report)
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Predicted rating of every material for `spec`, highest first
    ///
    /// `None` until [`train`](Self::train) has succeeded.
    pub fn predict(&self, spec: &ProjectSpecification) -> Option<Vec<PredictedMaterial<'_>>> {
        let model = self.model.as_ref()?;

        let mut predictions: Vec<PredictedMaterial<'_>> = self
            .catalog
            .materials()
            .iter()
            .filter_map(|material| {
                let row = self.feature_row(spec, material.id)?;
                Some(PredictedMaterial {
                    material,
                    predicted_rating: model.predict(&row),
                })
            })
            .collect();

        predictions.sort_by(|a, b| b.predicted_rating.total_cmp(&a.predicted_rating));
        Some(predictions)
    }

    /// Project row followed by the standardized material row
    fn feature_row(&self, spec: &ProjectSpecification, material_id: u32) -> Option<Vec<f64>> {
        let material_row = self.index.standardized_row(material_id)?;
        let mut row = project_feature_row(spec);
        row.extend_from_slice(material_row.as_slice());
        Some(row)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }
}
