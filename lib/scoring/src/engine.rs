//! Scoring engine
//!
//! Computes a weighted fitness score for every material against a
//! project specification and ranks the catalog by it.

use crate::criteria::{
    application_match, cost_score, installation_score, ratio_score, thermal_score,
    type_preference, weather_score,
};
use crate::weights::{Criterion, ScoreScale, ScoringWeights};
use matsel_core::{Material, ProjectSpecification, Result};
use std::cmp::Ordering;

/// Unweighted sub-scores; `None` marks an inactive criterion
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SubScores {
    pub application_match: f64,
    pub type_preference: Option<f64>,
    pub strength: Option<f64>,
    pub durability: Option<f64>,
    pub fire_resistance: Option<f64>,
    pub water_resistance: Option<f64>,
    pub thermal: Option<f64>,
    pub eco_friendly: Option<f64>,
    pub cost: Option<f64>,
    pub weather: Option<f64>,
    pub installation: Option<f64>,
}

impl SubScores {
    pub fn get(&self, criterion: Criterion) -> Option<f64> {
        match criterion {
            Criterion::ApplicationMatch => Some(self.application_match),
            Criterion::TypePreference => self.type_preference,
            Criterion::Strength => self.strength,
            Criterion::Durability => self.durability,
            Criterion::FireResistance => self.fire_resistance,
            Criterion::WaterResistance => self.water_resistance,
            Criterion::Thermal => self.thermal,
            Criterion::EcoFriendly => self.eco_friendly,
            Criterion::Cost => self.cost,
            Criterion::Weather => self.weather,
            Criterion::Installation => self.installation,
        }
    }

    /// Active criteria with their unweighted sub-scores
    pub fn active(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL
            .iter()
            .filter_map(move |c| self.get(*c).map(|score| (*c, score)))
    }

    /// Weighted contribution of each active criterion, before normalization
    pub fn contributions(&self, weights: &ScoringWeights) -> Vec<(Criterion, f64)> {
        self.active()
            .map(|(criterion, score)| (criterion, score * weights.weight(criterion)))
            .collect()
    }
}

/// A material with its computed fitness
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMaterial<'a> {
    pub material: &'a Material,
    pub total_score: f64,
    pub sub_scores: SubScores,
}

impl<'a> ScoredMaterial<'a> {
    pub fn id(&self) -> u32 {
        self.material.id
    }

    /// The criterion with the largest weighted contribution
    pub fn top_criterion(&self, weights: &ScoringWeights) -> Option<Criterion> {
        self.sub_scores
            .contributions(weights)
            .into_iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .map(|(criterion, _)| criterion)
    }
}

/// Weighted multi-criteria scorer
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
    scale: ScoreScale,
}

impl ScoringEngine {
    /// Create an engine with the given weights and raw score scale
    ///
    /// Rejects negative or non-finite weights and an all-zero table.
    pub fn new(weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            weights,
            scale: ScoreScale::Raw,
        })
    }

    pub fn with_scale(mut self, scale: ScoreScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn scale(&self) -> ScoreScale {
        self.scale
    }

    /// Score every material and sort by total score, highest first
    ///
    /// The sort is stable: equal totals keep their catalog order. An
    /// empty catalog yields an empty ranking.
    pub fn score<'a>(
        &self,
        catalog: &'a [Material],
        spec: &ProjectSpecification,
    ) -> Vec<ScoredMaterial<'a>> {
        let mut results: Vec<ScoredMaterial<'a>> = catalog
            .iter()
            .map(|material| self.score_material(material, spec))
            .collect();

        results.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

        results
    }

    /// Score a single material
    pub fn score_material<'a>(
        &self,
        material: &'a Material,
        spec: &ProjectSpecification,
    ) -> ScoredMaterial<'a> {
        let sub_scores = compute_sub_scores(material, spec);
        let total_score = self.total(&sub_scores);
        ScoredMaterial {
            material,
            total_score,
            sub_scores,
        }
    }

    /// Normalized weighted sum of the active sub-scores
    ///
    /// The divisor is the full table total, not the active subset, so
    /// the scale compresses when few criteria are active. The trailing
    /// `* 10` puts an all-maxed material well above 10; `ScoreScale::Clamped`
    /// caps that.
    pub fn total(&self, sub_scores: &SubScores) -> f64 {
        let weighted: f64 = sub_scores
            .contributions(&self.weights)
            .iter()
            .map(|(_, contribution)| contribution)
            .sum();

        let total = weighted / self.weights.total() * 10.0;

        match self.scale {
            ScoreScale::Raw => total,
            ScoreScale::Clamped => total.clamp(0.0, 10.0),
        }
    }
}

fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

fn compute_sub_scores(material: &Material, spec: &ProjectSpecification) -> SubScores {
    let type_preference = (!spec.material_types.is_empty())
        .then(|| type_preference(material.material_type, &spec.material_types));

    SubScores {
        application_match: application_match(material, &spec.applications),
        type_preference,
        strength: positive(spec.min_strength_mpa)
            .map(|min| ratio_score(material.strength_mpa, min)),
        durability: positive(spec.min_durability_years)
            .map(|min| ratio_score(f64::from(material.durability_years), min)),
        fire_resistance: positive(spec.fire_resistance_requirement)
            .map(|min| ratio_score(material.fire_resistance_hours, min)),
        water_resistance: positive(spec.water_resistance_requirement)
            .map(|min| ratio_score(material.water_resistance, min)),
        thermal: spec
            .thermal_requirement
            .map(|pref| thermal_score(material.thermal_conductivity, pref)),
        eco_friendly: positive(spec.eco_friendly_requirement)
            .map(|min| ratio_score(material.eco_friendly_score, min)),
        cost: spec
            .budget_constraint
            .map(|budget| cost_score(material.cost_per_unit, budget)),
        weather: weather_score(&material.weather_resistance, &spec.environmental_conditions),
        installation: spec
            .installation_time_constraint
            .map(|tolerance| installation_score(material.installation_complexity, tolerance)),
    }
}
