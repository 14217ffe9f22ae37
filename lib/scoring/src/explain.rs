//! Explainability for ranked materials
//!
//! Serializable output structures that show how each total was built,
//! with the weighted contribution of every active criterion.

use crate::engine::ScoredMaterial;
use crate::weights::{Criterion, ScoringWeights};
use matsel_core::{Material, MaterialType};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A ranked material with its per-criterion breakdown
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedMaterial {
    pub rank: usize,
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub total_score: f64,
    /// Unweighted 0-10 sub-scores of the active criteria
    pub sub_scores: BTreeMap<Criterion, f64>,
    /// Share of the total contributed by each active criterion
    pub explain: BTreeMap<Criterion, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
}

impl ExplainedMaterial {
    /// Build from a scored material; `rank` is 1-based
    pub fn from_scored(
        scored: &ScoredMaterial<'_>,
        rank: usize,
        weights: &ScoringWeights,
        include_material: bool,
    ) -> Self {
        let normalizer = weights.total();
        let explain = scored
            .sub_scores
            .contributions(weights)
            .into_iter()
            .map(|(criterion, weighted)| (criterion, weighted / normalizer * 10.0))
            .collect();

        Self {
            rank,
            id: scored.material.id,
            name: scored.material.name.clone(),
            material_type: scored.material.material_type,
            total_score: scored.total_score,
            sub_scores: scored.sub_scores.active().collect(),
            explain,
            material: include_material.then(|| scored.material.clone()),
        }
    }

    pub fn from_ranked_list(
        ranked: &[ScoredMaterial<'_>],
        weights: &ScoringWeights,
        include_material: bool,
    ) -> Vec<Self> {
        ranked
            .iter()
            .enumerate()
            .map(|(i, scored)| Self::from_scored(scored, i + 1, weights, include_material))
            .collect()
    }
}

/// Response body for a ranking query
#[derive(Debug, Clone, Serialize)]
pub struct RankingResponse {
    pub result: Vec<ExplainedMaterial>,
    pub stats: RankingStats,
}

impl RankingResponse {
    pub fn from_ranked(
        ranked: &[ScoredMaterial<'_>],
        weights: &ScoringWeights,
        candidates_count: usize,
        include_material: bool,
    ) -> Self {
        Self {
            result: ExplainedMaterial::from_ranked_list(ranked, weights, include_material),
            stats: RankingStats::compute(ranked, weights, candidates_count),
        }
    }
}

/// Summary statistics for a ranking
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankingStats {
    /// Number of materials scored
    pub candidates_count: usize,
    /// Number of materials returned
    pub results_count: usize,
    pub avg_score: f64,
    pub best_score: f64,
    /// Criterion that contributed most to the leading material
    pub top_contributing_criterion: Option<Criterion>,
}

impl RankingStats {
    /// Compute stats from a ranking sorted best first
    pub fn compute(
        ranked: &[ScoredMaterial<'_>],
        weights: &ScoringWeights,
        candidates_count: usize,
    ) -> Self {
        let Some(best) = ranked.first() else {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
                top_contributing_criterion: None,
            };
        };

        let avg_score = ranked.iter().map(|s| s.total_score).sum::<f64>() / ranked.len() as f64;
        let best_score = ranked
            .iter()
            .map(|s| s.total_score)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .unwrap_or(best.total_score);

        Self {
            candidates_count,
            results_count: ranked.len(),
            avg_score,
            best_score,
            top_contributing_criterion: best.top_criterion(weights),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScoringEngine;
    use matsel_core::{Application, Catalog, ProjectSpecification};

    fn ranked_foundation(catalog: &Catalog) -> Vec<ScoredMaterial<'_>> {
        let spec = ProjectSpecification::builder([Application::Foundation])
            .min_strength_mpa(50.0)
            .budget(150.0)
            .build()
            .unwrap();
        ScoringEngine::default().score(catalog.materials(), &spec)
    }

    #[test]
    fn test_explain_sums_to_total() {
        let catalog = Catalog::builtin();
        let ranked = ranked_foundation(&catalog);
        let weights = ScoringWeights::default();

        for explained in ExplainedMaterial::from_ranked_list(&ranked, &weights, false) {
            let sum: f64 = explained.explain.values().sum();
            assert!((sum - explained.total_score).abs() < 1e-9);
            assert_eq!(explained.explain.len(), 3);
            assert!(explained.material.is_none());
        }
    }

    #[test]
    fn test_ranks_are_one_based() {
        let catalog = Catalog::builtin();
        let ranked = ranked_foundation(&catalog);
        let explained = ExplainedMaterial::from_ranked_list(&ranked, &ScoringWeights::default(), true);

        assert_eq!(explained[0].rank, 1);
        assert_eq!(explained[14].rank, 15);
        assert!(explained[0].material.is_some());
    }

    #[test]
    fn test_response_serialization() {
        let catalog = Catalog::builtin();
        let ranked = ranked_foundation(&catalog);
        let response =
            RankingResponse::from_ranked(&ranked[..3], &ScoringWeights::default(), 15, false);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["result"].as_array().unwrap().len(), 3);
        assert!(json["result"][0]["explain"]["application_match"].is_number());
        assert!(json["result"][0].get("material").is_none());
        assert_eq!(json["stats"]["candidates_count"], 15);
        assert_eq!(json["stats"]["results_count"], 3);
    }

    #[test]
    fn test_stats() {
        let catalog = Catalog::builtin();
        let ranked = ranked_foundation(&catalog);
        let stats = RankingStats::compute(&ranked, &ScoringWeights::default(), 15);

        assert_eq!(stats.results_count, 15);
        assert_eq!(stats.best_score, ranked[0].total_score);
        assert!(stats.avg_score <= stats.best_score);
        assert_eq!(stats.top_contributing_criterion, Some(Criterion::ApplicationMatch));
    }

    #[test]
    fn test_empty_stats() {
        let stats = RankingStats::compute(&[], &ScoringWeights::default(), 5);
        assert_eq!(stats.candidates_count, 5);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
        assert!(stats.top_contributing_criterion.is_none());
    }
}
