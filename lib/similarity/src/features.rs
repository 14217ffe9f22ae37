//! Material feature extraction
//!
//! Converts material records into fixed-width numeric rows: the ten
//! numeric properties, the four weather components, one-hot material
//! type columns and multi-hot application columns. The column set is
//! derived once from the catalog the extractor is fitted on.

use ahash::AHashMap;
use matsel_core::{Application, Material, MaterialType, Vector, WeatherCondition};

/// Numeric property columns, in row order
pub const NUMERIC_COLUMNS: [&str; 10] = [
    "strength_mpa",
    "durability_years",
    "thermal_conductivity",
    "fire_resistance_hours",
    "water_resistance",
    "eco_friendly_score",
    "cost_per_unit",
    "availability",
    "maintenance_requirement",
    "installation_complexity",
];

/// Fitted column layout for material feature rows
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    columns: Vec<String>,
    type_columns: AHashMap<MaterialType, usize>,
    application_columns: AHashMap<Application, usize>,
}

impl FeatureExtractor {
    /// Derive the column set from the types and applications present in `materials`
    ///
    /// Categorical columns follow enumeration order, so the layout does
    /// not depend on catalog order.
    pub fn fit(materials: &[Material]) -> Self {
        let mut columns: Vec<String> = NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect();
        columns.extend(
            WeatherCondition::ALL
                .iter()
                .map(|c| format!("weather_{}", c.as_str())),
        );

        let mut type_columns = AHashMap::new();
        for material_type in MaterialType::ALL {
            if materials.iter().any(|m| m.material_type == material_type) {
                type_columns.insert(material_type, columns.len());
                columns.push(format!("type_{}", material_type.as_str()));
            }
        }

        let mut application_columns = AHashMap::new();
        for application in Application::ALL {
            if materials.iter().any(|m| m.supports(application)) {
                application_columns.insert(application, columns.len());
                columns.push(format!("app_{}", application.as_str()));
            }
        }

        Self {
            columns,
            type_columns,
            application_columns,
        }
    }

    /// Column names in row order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row width
    pub fn dim(&self) -> usize {
        self.columns.len()
    }

    /// Encode one material
    ///
    /// Types or applications not seen during fitting have no column and
    /// are dropped.
    pub fn material_feature_row(&self, material: &Material) -> Vector {
        let mut row = Vec::with_capacity(self.dim());
        row.extend_from_slice(&[
            material.strength_mpa,
            f64::from(material.durability_years),
            material.thermal_conductivity,
            material.fire_resistance_hours,
            material.water_resistance,
            material.eco_friendly_score,
            material.cost_per_unit,
            material.availability,
            material.maintenance_requirement,
            material.installation_complexity,
        ]);
        row.extend(
            WeatherCondition::ALL
                .iter()
                .map(|c| material.weather_resistance.get(*c)),
        );
        row.resize(self.dim(), 0.0);

        if let Some(&col) = self.type_columns.get(&material.material_type) {
            row[col] = 1.0;
        }
        for application in &material.applications {
            if let Some(&col) = self.application_columns.get(application) {
                row[col] = 1.0;
            }
        }

        Vector::new(row)
    }

    /// Encode every material, preserving order
    pub fn materials_to_feature_matrix(&self, materials: &[Material]) -> Vec<Vector> {
        materials
            .iter()
            .map(|m| self.material_feature_row(m))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matsel_core::Catalog;

    #[test]
    fn test_builtin_columns() {
        let catalog = Catalog::builtin();
        let extractor = FeatureExtractor::fit(catalog.materials());

        // 10 numeric + 4 weather + 10 types + 9 applications (no Insulation material)
        assert_eq!(extractor.dim(), 33);
        assert_eq!(extractor.columns()[0], "strength_mpa");
        assert_eq!(extractor.columns()[10], "weather_heat");
        assert_eq!(extractor.columns()[14], "type_Concrete");
        assert!(extractor.columns().iter().any(|c| c == "app_Interior Finishing"));
        assert!(!extractor.columns().iter().any(|c| c == "app_Insulation"));
    }

    #[test]
    fn test_material_row() {
        let catalog = Catalog::builtin();
        let extractor = FeatureExtractor::fit(catalog.materials());
        let glass = catalog.material(8).unwrap();
        let row = extractor.material_feature_row(glass);

        assert_eq!(row.dim(), extractor.dim());
        assert_eq!(row.as_slice()[0], 100.0);
        assert_eq!(row.as_slice()[1], 30.0);
        assert_eq!(row.as_slice()[12], 10.0); // humidity

        let hot: Vec<&str> = extractor
            .columns()
            .iter()
            .zip(row.as_slice())
            .skip(14)
            .filter(|(_, v)| **v == 1.0)
            .map(|(c, _)| c.as_str())
            .collect();
        assert_eq!(hot, vec!["type_Glass", "app_Facade", "app_Windows", "app_Doors"]);
    }

    #[test]
    fn test_unseen_categories_dropped() {
        let catalog = Catalog::builtin();
        let concrete_only: Vec<Material> = catalog
            .materials()
            .iter()
            .filter(|m| m.material_type == MaterialType::Concrete)
            .cloned()
            .collect();
        let extractor = FeatureExtractor::fit(&concrete_only);

        let steel = catalog.material(3).unwrap();
        let row = extractor.material_feature_row(steel);
        assert_eq!(row.dim(), extractor.dim());
        assert_eq!(row.as_slice()[14], 0.0); // type_Concrete
    }

    #[test]
    fn test_matrix_preserves_order() {
        let catalog = Catalog::builtin();
        let extractor = FeatureExtractor::fit(catalog.materials());
        let matrix = extractor.materials_to_feature_matrix(catalog.materials());

        assert_eq!(matrix.len(), 15);
        assert_eq!(matrix[6].as_slice()[1], 100.0); // Clay Brick durability
    }
}
