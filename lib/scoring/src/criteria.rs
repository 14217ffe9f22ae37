//! Per-criterion sub-score functions
//!
//! Each function returns a fitness value on a nominal 0-10 scale. Callers
//! decide whether a criterion is active; these functions assume it is.

use matsel_core::{
    Application, EnvironmentalConditions, InstallationTolerance, Material, MaterialType,
    ThermalPreference, WeatherCondition, WeatherResistance,
};
use std::collections::BTreeSet;

/// Fraction of requested applications the material supports, scaled to 10
///
/// Every requested entry counts, so a repeated request weighs double.
pub fn application_match(material: &Material, requested: &[Application]) -> f64 {
    let matched = requested.iter().filter(|app| material.supports(**app)).count();
    matched as f64 / requested.len().max(1) as f64 * 10.0
}

/// 10 for a preferred type, 5 otherwise
pub fn type_preference(material_type: MaterialType, preferred: &BTreeSet<MaterialType>) -> f64 {
    if preferred.contains(&material_type) {
        10.0
    } else {
        5.0
    }
}

/// Full marks at or above the minimum, proportional below it
///
/// `minimum` must be positive.
pub fn ratio_score(value: f64, minimum: f64) -> f64 {
    if value >= minimum {
        10.0
    } else {
        10.0 * (value / minimum)
    }
}

/// Thermal fit for the given preference, clipped to [0, 10]
pub fn thermal_score(conductivity: f64, preference: ThermalPreference) -> f64 {
    let raw = match preference {
        ThermalPreference::Low => 10.0 - conductivity / 10.0,
        ThermalPreference::High => conductivity / 10.0,
    };
    raw.clamp(0.0, 10.0)
}

/// Full marks within budget, budget/cost ratio above it
pub fn cost_score(cost_per_unit: f64, budget: f64) -> f64 {
    if cost_per_unit <= budget {
        10.0
    } else {
        10.0 * (budget / cost_per_unit)
    }
}

/// Importance-weighted mean of the weather resistance ratings
///
/// Returns `None` when no condition has a positive importance.
pub fn weather_score(
    resistance: &WeatherResistance,
    conditions: &EnvironmentalConditions,
) -> Option<f64> {
    let mut score = 0.0;
    let mut weight_sum = 0.0;

    for condition in WeatherCondition::ALL {
        let importance = conditions.get(condition);
        if importance > 0.0 {
            score += resistance.get(condition) * importance / 10.0;
            weight_sum += importance / 10.0;
        }
    }

    if weight_sum > 0.0 {
        Some(score / weight_sum)
    } else {
        None
    }
}

/// Installation fit; not clipped
pub fn installation_score(complexity: f64, tolerance: InstallationTolerance) -> f64 {
    match tolerance {
        InstallationTolerance::Low => 10.0 - complexity,
        InstallationTolerance::High => complexity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matsel_core::Catalog;

    #[test]
    fn test_application_match() {
        let catalog = Catalog::builtin();
        let concrete = catalog.material(1).unwrap(); // Foundation, Structural, Flooring

        assert_eq!(application_match(concrete, &[Application::Foundation]), 10.0);
        assert_eq!(
            application_match(concrete, &[Application::Foundation, Application::Roofing]),
            5.0
        );
        assert_eq!(application_match(concrete, &[Application::Windows]), 0.0);
        assert_eq!(application_match(concrete, &[]), 0.0);
    }

    #[test]
    fn test_type_preference() {
        let preferred = BTreeSet::from([MaterialType::Wood]);
        assert_eq!(type_preference(MaterialType::Wood, &preferred), 10.0);
        assert_eq!(type_preference(MaterialType::Steel, &preferred), 5.0);
    }

    #[test]
    fn test_ratio_score() {
        assert_eq!(ratio_score(60.0, 50.0), 10.0);
        assert_eq!(ratio_score(50.0, 50.0), 10.0);
        assert_eq!(ratio_score(25.0, 50.0), 5.0);
        assert_eq!(ratio_score(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_thermal_score_clipped() {
        // Aluminum at 167 W/(m·K)
        assert_eq!(thermal_score(167.0, ThermalPreference::Low), 0.0);
        assert_eq!(thermal_score(167.0, ThermalPreference::High), 10.0);
        assert!((thermal_score(0.12, ThermalPreference::Low) - 9.988).abs() < 1e-9);
        assert!((thermal_score(45.0, ThermalPreference::High) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_cost_score() {
        assert_eq!(cost_score(110.0, 150.0), 10.0);
        assert_eq!(cost_score(150.0, 150.0), 10.0);
        assert!((cost_score(180.0, 150.0) - 8.333333333).abs() < 1e-6);
        assert_eq!(cost_score(180.0, 0.0), 0.0);
    }

    #[test]
    fn test_weather_score_weighted_mean() {
        let resistance = WeatherResistance::new(9.0, 7.0, 8.0, 8.0);

        let only_heat = EnvironmentalConditions::new(10.0, 0.0, 0.0, 0.0);
        assert_eq!(weather_score(&resistance, &only_heat), Some(9.0));

        let heat_and_cold = EnvironmentalConditions::new(10.0, 5.0, 0.0, 0.0);
        // (9 * 1.0 + 7 * 0.5) / 1.5
        let score = weather_score(&resistance, &heat_and_cold).unwrap();
        assert!((score - 12.5 / 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_weather_score_inactive() {
        let resistance = WeatherResistance::new(9.0, 7.0, 8.0, 8.0);
        assert_eq!(weather_score(&resistance, &EnvironmentalConditions::default()), None);
    }

    #[test]
    fn test_installation_score() {
        assert_eq!(installation_score(3.0, InstallationTolerance::Low), 7.0);
        assert_eq!(installation_score(3.0, InstallationTolerance::High), 3.0);
    }
}
