//! Project specification encoding
//!
//! Fixed-width numeric encoding of a [`ProjectSpecification`], used as the
//! project half of the rating regressor input. Unlike material rows the
//! column space does not depend on any catalog.

use matsel_core::{
    Application, InstallationTolerance, MaterialType, ProjectSpecification, ThermalPreference,
    WeatherCondition,
};

/// Width of [`project_feature_row`]
pub const PROJECT_FEATURE_DIM: usize = Application::ALL.len() + MaterialType::ALL.len() + 13;

/// Column names matching [`project_feature_row`]
pub fn project_columns() -> Vec<String> {
    let mut columns = Vec::with_capacity(PROJECT_FEATURE_DIM);
    columns.extend(Application::ALL.iter().map(|a| format!("req_app_{}", a.as_str())));
    columns.extend(MaterialType::ALL.iter().map(|t| format!("req_type_{}", t.as_str())));
    columns.extend(
        [
            "min_strength_mpa",
            "min_durability_years",
            "fire_resistance_requirement",
            "water_resistance_requirement",
            "eco_friendly_requirement",
            "thermal_requirement",
            "budget_set",
            "budget_constraint",
            "installation_time_constraint",
        ]
        .iter()
        .map(|c| c.to_string()),
    );
    columns.extend(
        WeatherCondition::ALL
            .iter()
            .map(|c| format!("importance_{}", c.as_str())),
    );
    columns
}

/// Encode a specification
///
/// Thermal and installation preferences are tri-state: -1 for low, 1 for
/// high, 0 when unset. An unset budget encodes as flag 0 and value 0.
pub fn project_feature_row(spec: &ProjectSpecification) -> Vec<f64> {
    let mut row = Vec::with_capacity(PROJECT_FEATURE_DIM);

    row.extend(Application::ALL.iter().map(|app| {
        if spec.applications.contains(app) {
            1.0
        } else {
            0.0
        }
    }));
    row.extend(MaterialType::ALL.iter().map(|t| {
        if spec.material_types.contains(t) {
            1.0
        } else {
            0.0
        }
    }));

    row.extend_from_slice(&[
        spec.min_strength_mpa,
        spec.min_durability_years,
        spec.fire_resistance_requirement,
        spec.water_resistance_requirement,
        spec.eco_friendly_requirement,
    ]);

    row.push(match spec.thermal_requirement {
        Some(ThermalPreference::Low) => -1.0,
        Some(ThermalPreference::High) => 1.0,
        None => 0.0,
    });

    match spec.budget_constraint {
        Some(budget) => row.extend_from_slice(&[1.0, budget]),
        None => row.extend_from_slice(&[0.0, 0.0]),
    }

    row.push(match spec.installation_time_constraint {
        Some(InstallationTolerance::Low) => -1.0,
        Some(InstallationTolerance::High) => 1.0,
        None => 0.0,
    });

    row.extend(
        WeatherCondition::ALL
            .iter()
            .map(|c| spec.environmental_conditions.get(*c)),
    );

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_agree() {
        let spec = ProjectSpecification::builder([Application::Roofing])
            .build()
            .unwrap();
        assert_eq!(project_feature_row(&spec).len(), PROJECT_FEATURE_DIM);
        assert_eq!(project_columns().len(), PROJECT_FEATURE_DIM);
    }

    #[test]
    fn test_encoding() {
        let spec = ProjectSpecification::builder([Application::Foundation, Application::Wall])
            .material_types([MaterialType::Brick])
            .min_strength_mpa(20.0)
            .thermal(ThermalPreference::Low)
            .budget(150.0)
            .environment(WeatherCondition::Uv, 7.0)
            .build()
            .unwrap();
        let row = project_feature_row(&spec);
        let columns = project_columns();
        let value = |name: &str| row[columns.iter().position(|c| c == name).unwrap()];

        assert_eq!(value("req_app_Foundation"), 1.0);
        assert_eq!(value("req_app_Wall"), 1.0);
        assert_eq!(value("req_app_Roofing"), 0.0);
        assert_eq!(value("req_type_Brick"), 1.0);
        assert_eq!(value("min_strength_mpa"), 20.0);
        assert_eq!(value("thermal_requirement"), -1.0);
        assert_eq!(value("budget_set"), 1.0);
        assert_eq!(value("budget_constraint"), 150.0);
        assert_eq!(value("installation_time_constraint"), 0.0);
        assert_eq!(value("importance_uv"), 7.0);
    }

    #[test]
    fn test_unset_budget() {
        let spec = ProjectSpecification::builder([Application::Doors])
            .build()
            .unwrap();
        let row = project_feature_row(&spec);
        let columns = project_columns();
        let budget_set = columns.iter().position(|c| c == "budget_set").unwrap();

        assert_eq!(row[budget_set], 0.0);
        assert_eq!(row[budget_set + 1], 0.0);
    }
}
