//! Criterion weights
//!
//! Declares the scoring criteria and how much each one counts toward the
//! total. The normalizer is the sum of the whole table and does not
//! depend on which criteria a specification activates.

use matsel_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A scored criterion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    ApplicationMatch,
    TypePreference,
    Strength,
    Durability,
    FireResistance,
    WaterResistance,
    Thermal,
    EcoFriendly,
    Cost,
    Weather,
    Installation,
}

impl Criterion {
    pub const ALL: [Criterion; 11] = [
        Criterion::ApplicationMatch,
        Criterion::TypePreference,
        Criterion::Strength,
        Criterion::Durability,
        Criterion::FireResistance,
        Criterion::WaterResistance,
        Criterion::Thermal,
        Criterion::EcoFriendly,
        Criterion::Cost,
        Criterion::Weather,
        Criterion::Installation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::ApplicationMatch => "application_match",
            Criterion::TypePreference => "type_preference",
            Criterion::Strength => "strength",
            Criterion::Durability => "durability",
            Criterion::FireResistance => "fire_resistance",
            Criterion::WaterResistance => "water_resistance",
            Criterion::Thermal => "thermal",
            Criterion::EcoFriendly => "eco_friendly",
            Criterion::Cost => "cost",
            Criterion::Weather => "weather",
            Criterion::Installation => "installation",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the final total is reported
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    /// Report the normalized sum as is
    #[default]
    Raw,
    /// Clamp the normalized sum to [0, 10]
    Clamped,
}

/// Weight table for the scoring engine
///
/// `availability` and `maintenance` have no sub-score of their own; they
/// only widen the normalizer, which keeps totals comparable with
/// rankings produced from the historical table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoringWeights {
    pub application_match: f64,
    pub type_preference: f64,
    pub strength: f64,
    pub durability: f64,
    pub fire_resistance: f64,
    pub water_resistance: f64,
    pub thermal: f64,
    pub eco_friendly: f64,
    pub cost: f64,
    pub weather: f64,
    pub installation: f64,
    pub availability: f64,
    pub maintenance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            application_match: 5.0,
            type_preference: 3.0,
            strength: 3.0,
            durability: 3.0,
            fire_resistance: 2.0,
            water_resistance: 2.0,
            thermal: 2.0,
            eco_friendly: 2.0,
            cost: 4.0,
            weather: 3.0,
            installation: 2.0,
            availability: 3.0,
            maintenance: 2.0,
        }
    }
}

impl ScoringWeights {
    /// Weight of a single criterion
    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::ApplicationMatch => self.application_match,
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

    pub fn set(&mut self, criterion: Criterion, weight: f64) {
        let slot = match criterion {
            Criterion::ApplicationMatch => &mut self.application_match,
            Criterion::TypePreference => &mut self.type_preference,
            Criterion::Strength => &mut self.strength,
            Criterion::Durability => &mut self.durability,
            Criterion::FireResistance => &mut self.fire_resistance,
            Criterion::WaterResistance => &mut self.water_resistance,
            Criterion::Thermal => &mut self.thermal,
            Criterion::EcoFriendly => &mut self.eco_friendly,
            Criterion::Cost => &mut self.cost,
            Criterion::Weather => &mut self.weather,
            Criterion::Installation => &mut self.installation,
        };
        *slot = weight;
    }

    /// Sum of every weight in the table
    pub fn total(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.weight(*c)).sum::<f64>()
            + self.availability
            + self.maintenance
    }

    /// Check that weights are finite, non-negative and not all zero
    pub fn validate(&self) -> Result<()> {
        let named = Criterion::ALL
            .iter()
            .map(|c| (c.as_str(), self.weight(*c)))
            .chain([("availability", self.availability), ("maintenance", self.maintenance)]);

        for (name, weight) in named {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::invalid_argument(format!(
                    "weight '{name}' must be a finite value >= 0, got {weight}"
                )));
            }
        }

        if self.total() <= 0.0 {
            return Err(Error::invalid_argument("total weight cannot be zero"));
        }

        Ok(())
    }

    /// Copy of these weights with per-criterion overrides applied
    ///
    /// Negative overrides are floored at zero. The normalizer follows the
    /// new table.
    pub fn with_overrides(&self, overrides: &HashMap<Criterion, f64>) -> ScoringWeights {
        let mut modified = *self;
        for (criterion, weight) in overrides {
            modified.set(*criterion, weight.max(0.0));
        }
        modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_total() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.total(), 33.0);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_type_preference_shares_strength_weight() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.weight(Criterion::TypePreference), weights.strength);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut weights = ScoringWeights::default();
        weights.cost = -1.0;
        assert!(matches!(weights.validate(), Err(Error::InvalidArgument(msg)) if msg.contains("cost")));
    }

    #[test]
    fn test_zero_total_rejected() {
        let mut weights = ScoringWeights::default();
        for criterion in Criterion::ALL {
            weights.set(criterion, 0.0);
        }
        weights.availability = 0.0;
        weights.maintenance = 0.0;
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let weights = ScoringWeights::default();
        let overrides = HashMap::from([(Criterion::Cost, 10.0), (Criterion::Thermal, -3.0)]);
        let modified = weights.with_overrides(&overrides);

        assert_eq!(modified.cost, 10.0);
        assert_eq!(modified.thermal, 0.0);
        assert_eq!(modified.total(), 33.0 + 6.0 - 2.0);
        // receiver untouched
        assert_eq!(weights.cost, 4.0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let weights: ScoringWeights = serde_json::from_str(r#"{"cost": 8.0}"#).unwrap();
        assert_eq!(weights.cost, 8.0);
        assert_eq!(weights.application_match, 5.0);
    }

    #[test]
    fn test_criterion_names() {
        let json = serde_json::to_string(&Criterion::FireResistance).unwrap();
        assert_eq!(json, "\"fire_resistance\"");
        assert_eq!(Criterion::FireResistance.to_string(), "fire_resistance");
    }
}
