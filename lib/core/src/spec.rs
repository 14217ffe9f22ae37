//! Project specification
//!
//! A typed, validated record of what a project needs from its materials.
//! Every requirement has an "inactive" sentinel (zero, `None` or empty)
//! that switches its criterion off during scoring.

use crate::material::is_rating;
use crate::{Application, Error, MaterialType, Result, WeatherCondition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Thermal preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThermalPreference {
    /// Prefer insulating materials (low conductivity)
    Low,
    /// Prefer conductive materials
    High,
}

/// Installation-time tolerance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InstallationTolerance {
    /// Installation must be quick
    Low,
    /// Complex installation is acceptable
    High,
}

/// Importance (0-10) of each weather exposure; 0 ignores the condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct EnvironmentalConditions {
    #[serde(default)]
    pub heat: f64,
    #[serde(default)]
    pub cold: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub uv: f64,
}

impl EnvironmentalConditions {
    pub fn new(heat: f64, cold: f64, humidity: f64, uv: f64) -> Self {
        Self { heat, cold, humidity, uv }
    }

    pub fn get(&self, condition: WeatherCondition) -> f64 {
        match condition {
            WeatherCondition::Heat => self.heat,
            WeatherCondition::Cold => self.cold,
            WeatherCondition::Humidity => self.humidity,
            WeatherCondition::Uv => self.uv,
        }
    }

    pub fn set(&mut self, condition: WeatherCondition, importance: f64) {
        match condition {
            WeatherCondition::Heat => self.heat = importance,
            WeatherCondition::Cold => self.cold = importance,
            WeatherCondition::Humidity => self.humidity = importance,
            WeatherCondition::Uv => self.uv = importance,
        }
    }

    /// True when at least one condition carries weight
    pub fn is_active(&self) -> bool {
        WeatherCondition::ALL.iter().any(|c| self.get(*c) > 0.0)
    }
}

/// Project requirements supplied by a caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawSpecification")]
pub struct ProjectSpecification {
    pub applications: Vec<Application>,
    pub material_types: BTreeSet<MaterialType>,
    pub min_strength_mpa: f64,
    pub min_durability_years: f64,
    pub fire_resistance_requirement: f64,
    pub water_resistance_requirement: f64,
    pub thermal_requirement: Option<ThermalPreference>,
    pub eco_friendly_requirement: f64,
    pub budget_constraint: Option<f64>,
    pub installation_time_constraint: Option<InstallationTolerance>,
    pub environmental_conditions: EnvironmentalConditions,
}

/// Wire shape of a specification; every field except `applications` is optional
#[derive(Debug, Clone, Deserialize)]
struct RawSpecification {
    applications: Vec<Application>,
    #[serde(default)]
    material_types: BTreeSet<MaterialType>,
    #[serde(default)]
    min_strength_mpa: f64,
    #[serde(default)]
    min_durability_years: f64,
    #[serde(default)]
    fire_resistance_requirement: f64,
    #[serde(default)]
    water_resistance_requirement: f64,
    #[serde(default)]
    thermal_requirement: Option<ThermalPreference>,
    #[serde(default)]
    eco_friendly_requirement: f64,
    #[serde(default)]
    budget_constraint: Option<f64>,
    #[serde(default)]
    installation_time_constraint: Option<InstallationTolerance>,
    #[serde(default)]
    environmental_conditions: EnvironmentalConditions,
}

impl TryFrom<RawSpecification> for ProjectSpecification {
    type Error = Error;

    fn try_from(raw: RawSpecification) -> Result<Self> {
        let spec = ProjectSpecification {
            applications: raw.applications,
            material_types: raw.material_types,
            min_strength_mpa: raw.min_strength_mpa,
            min_durability_years: raw.min_durability_years,
            fire_resistance_requirement: raw.fire_resistance_requirement,
            water_resistance_requirement: raw.water_resistance_requirement,
            thermal_requirement: raw.thermal_requirement,
            eco_friendly_requirement: raw.eco_friendly_requirement,
            budget_constraint: raw.budget_constraint,
            installation_time_constraint: raw.installation_time_constraint,
            environmental_conditions: raw.environmental_conditions,
        };
        spec.validate()?;
        Ok(spec)
    }
}

impl ProjectSpecification {
    /// Start a specification for the given applications
    pub fn builder<I>(applications: I) -> SpecificationBuilder
    where
        I: IntoIterator<Item = Application>,
    {
        SpecificationBuilder::new(applications)
    }

    /// Parse and validate a specification from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSpecification = serde_json::from_str(json)
            .map_err(|e| Error::invalid_argument(format!("malformed specification: {e}")))?;
        Self::try_from(raw)
    }

    /// Check structural and range constraints
    pub fn validate(&self) -> Result<()> {
        if self.applications.is_empty() {
            return Err(Error::invalid_argument(
                "specification needs at least one application",
            ));
        }

        let thresholds = [
            ("min_strength_mpa", self.min_strength_mpa),
            ("min_durability_years", self.min_durability_years),
            ("fire_resistance_requirement", self.fire_resistance_requirement),
            ("water_resistance_requirement", self.water_resistance_requirement),
            ("eco_friendly_requirement", self.eco_friendly_requirement),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::invalid_argument(format!(
                    "{field} must be a finite value >= 0, got {value}"
                )));
            }
        }

        if let Some(budget) = self.budget_constraint {
            if !budget.is_finite() || budget < 0.0 {
                return Err(Error::invalid_argument(format!(
                    "budget_constraint must be a finite value >= 0, got {budget}"
                )));
            }
        }

        for condition in WeatherCondition::ALL {
            let importance = self.environmental_conditions.get(condition);
            if !is_rating(importance) {
                return Err(Error::invalid_argument(format!(
                    "environmental importance for {} must be within 0-10, got {importance}",
                    condition.as_str()
                )));
            }
        }

        Ok(())
    }
}

/// Builder for [`ProjectSpecification`]
#[derive(Debug, Clone)]
pub struct SpecificationBuilder {
    spec: ProjectSpecification,
}

impl SpecificationBuilder {
    fn new<I>(applications: I) -> Self
    where
        I: IntoIterator<Item = Application>,
    {
        Self {
            spec: ProjectSpecification {
                applications: applications.into_iter().collect(),
                material_types: BTreeSet::new(),
                min_strength_mpa: 0.0,
                min_durability_years: 0.0,
                fire_resistance_requirement: 0.0,
                water_resistance_requirement: 0.0,
                thermal_requirement: None,
                eco_friendly_requirement: 0.0,
                budget_constraint: None,
                installation_time_constraint: None,
                environmental_conditions: EnvironmentalConditions::default(),
            },
        }
    }

    pub fn material_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = MaterialType>,
    {
        self.spec.material_types = types.into_iter().collect();
        self
    }

    pub fn min_strength_mpa(mut self, value: f64) -> Self {
        self.spec.min_strength_mpa = value;
        self
    }

    pub fn min_durability_years(mut self, value: f64) -> Self {
        self.spec.min_durability_years = value;
        self
    }

    pub fn fire_resistance(mut self, hours: f64) -> Self {
        self.spec.fire_resistance_requirement = hours;
        self
    }

    pub fn water_resistance(mut self, value: f64) -> Self {
        self.spec.water_resistance_requirement = value;
        self
    }

    pub fn thermal(mut self, preference: ThermalPreference) -> Self {
        self.spec.thermal_requirement = Some(preference);
        self
    }

    pub fn eco_friendly(mut self, value: f64) -> Self {
        self.spec.eco_friendly_requirement = value;
        self
    }

    pub fn budget(mut self, max_cost_per_unit: f64) -> Self {
        self.spec.budget_constraint = Some(max_cost_per_unit);
        self
    }

    pub fn installation(mut self, tolerance: InstallationTolerance) -> Self {
        self.spec.installation_time_constraint = Some(tolerance);
        self
    }

    pub fn environment(mut self, condition: WeatherCondition, importance: f64) -> Self {
        self.spec.environmental_conditions.set(condition, importance);
        self
    }

    pub fn environmental_conditions(mut self, conditions: EnvironmentalConditions) -> Self {
        self.spec.environmental_conditions = conditions;
        self
    }

    /// Validate and return the specification
    pub fn build(self) -> Result<ProjectSpecification> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_are_inactive() {
        let spec = ProjectSpecification::builder([Application::Wall]).build().unwrap();
        assert_eq!(spec.applications, vec![Application::Wall]);
        assert!(spec.material_types.is_empty());
        assert_eq!(spec.min_strength_mpa, 0.0);
        assert!(spec.thermal_requirement.is_none());
        assert!(spec.budget_constraint.is_none());
        assert!(!spec.environmental_conditions.is_active());
    }

    #[test]
    fn test_no_applications_rejected() {
        let result = ProjectSpecification::builder(Vec::new()).build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let result = ProjectSpecification::builder([Application::Wall])
            .min_strength_mpa(-1.0)
            .build();
        assert!(matches!(result, Err(Error::InvalidArgument(msg)) if msg.contains("min_strength_mpa")));
    }

    #[test]
    fn test_nan_budget_rejected() {
        let result = ProjectSpecification::builder([Application::Wall])
            .budget(f64::NAN)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_importance_out_of_range_rejected() {
        let result = ProjectSpecification::builder([Application::Roofing])
            .environment(WeatherCondition::Uv, 12.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_minimal() {
        let spec = ProjectSpecification::from_json(r#"{"applications": ["Foundation"]}"#).unwrap();
        assert_eq!(spec.applications, vec![Application::Foundation]);
        assert_eq!(spec, ProjectSpecification::builder([Application::Foundation]).build().unwrap());
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "applications": ["Facade", "Interior Finishing"],
            "material_types": ["Stone"],
            "min_strength_mpa": 50,
            "thermal_requirement": "low",
            "budget_constraint": 150.0,
            "installation_time_constraint": "high",
            "environmental_conditions": {"heat": 5, "uv": 10}
        }"#;
        let spec = ProjectSpecification::from_json(json).unwrap();
        assert_eq!(spec.applications.len(), 2);
        assert!(spec.material_types.contains(&MaterialType::Stone));
        assert_eq!(spec.thermal_requirement, Some(ThermalPreference::Low));
        assert_eq!(spec.installation_time_constraint, Some(InstallationTolerance::High));
        assert_eq!(spec.environmental_conditions.uv, 10.0);
        assert_eq!(spec.environmental_conditions.cold, 0.0);
    }

    #[test]
    fn test_from_json_missing_applications() {
        let err = ProjectSpecification::from_json(r#"{"min_strength_mpa": 10}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg.contains("malformed")));
    }

    #[test]
    fn test_from_json_runs_validation() {
        let err = ProjectSpecification::from_json(r#"{"applications": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg.contains("at least one application")));
    }

    #[test]
    fn test_serde_roundtrip() {
        let spec = ProjectSpecification::builder([Application::Roofing])
            .thermal(ThermalPreference::High)
            .budget(40.0)
            .environment(WeatherCondition::Humidity, 7.0)
            .build()
            .unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(ProjectSpecification::from_json(&json).unwrap(), spec);
    }
}
