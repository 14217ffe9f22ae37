//! Comparison and cost projection views
//!
//! Side-by-side tables over a caller-selected set of materials. The
//! selection is an explicit argument; nothing here keeps state between
//! calls.

use matsel_core::{Catalog, Error, Material, MaterialType, Result, Supplier, WeatherResistance};
use serde::Serialize;
use std::collections::HashSet;

/// One row of a side-by-side material comparison
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonRow {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub strength_mpa: f64,
    pub durability_years: u32,
    pub thermal_conductivity: f64,
    pub fire_resistance_hours: f64,
    pub water_resistance: f64,
    pub eco_friendly_score: f64,
    pub cost_per_unit: f64,
    pub maintenance_requirement: f64,
    pub installation_complexity: f64,
    pub weather_resistance: WeatherResistance,
    pub supplier: Option<String>,
}

impl ComparisonRow {
    fn new(material: &Material, supplier: Option<&Supplier>) -> Self {
        Self {
            id: material.id,
            name: material.name.clone(),
            material_type: material.material_type,
            strength_mpa: material.strength_mpa,
            durability_years: material.durability_years,
            thermal_conductivity: material.thermal_conductivity,
            fire_resistance_hours: material.fire_resistance_hours,
            water_resistance: material.water_resistance,
            eco_friendly_score: material.eco_friendly_score,
            cost_per_unit: material.cost_per_unit,
            maintenance_requirement: material.maintenance_requirement,
            installation_complexity: material.installation_complexity,
            weather_resistance: material.weather_resistance,
            supplier: supplier.map(|s| s.name.clone()),
        }
    }
}

/// Projected cost of one material for a project size
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostLine {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub cost_per_unit: f64,
    pub project_area: f64,
    pub total_cost: f64,
}

/// Durability against unit cost, sized by strength
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DurabilityCostPoint {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub cost_per_unit: f64,
    pub durability_years: u32,
    pub strength_mpa: f64,
}

/// Resolve ids to materials in request order, dropping repeats
fn resolve<'a>(catalog: &'a Catalog, ids: &[u32]) -> Result<Vec<&'a Material>> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .filter(|id| seen.insert(**id))
        .map(|id| catalog.material(*id))
        .collect()
}

/// Side-by-side comparison of the selected materials
pub fn compare(catalog: &Catalog, ids: &[u32]) -> Result<Vec<ComparisonRow>> {
    Ok(resolve(catalog, ids)?
        .into_iter()
        .map(|m| ComparisonRow::new(m, catalog.supplier_for(m)))
        .collect())
}

/// Total cost of each selected material for `project_area` units, cheapest first
pub fn cost_projection(catalog: &Catalog, ids: &[u32], project_area: f64) -> Result<Vec<CostLine>> {
    if !project_area.is_finite() || project_area <= 0.0 {
        return Err(Error::invalid_argument(format!(
            "project_area must be a finite value > 0, got {project_area}"
        )));
    }

    let mut lines: Vec<CostLine> = resolve(catalog, ids)?
        .into_iter()
        .map(|m| CostLine {
            id: m.id,
            name: m.name.clone(),
            material_type: m.material_type,
            cost_per_unit: m.cost_per_unit,
            project_area,
            total_cost: m.cost_per_unit * project_area,
        })
        .collect();

    lines.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
    Ok(lines)
}

/// Durability/cost points for the selection, or the whole catalog when `ids` is empty
pub fn durability_cost_points(catalog: &Catalog, ids: &[u32]) -> Result<Vec<DurabilityCostPoint>> {
    let materials = if ids.is_empty() {
        catalog.materials().iter().collect()
    } else {
        resolve(catalog, ids)?
    };

    Ok(materials
        .into_iter()
        .map(|m| DurabilityCostPoint {
            id: m.id,
            name: m.name.clone(),
            material_type: m.material_type,
            cost_per_unit: m.cost_per_unit,
            durability_years: m.durability_years,
            strength_mpa: m.strength_mpa,
        })
        .collect())
}

/// Suppliers in request order
pub fn supplier_comparison<'a>(catalog: &'a Catalog, supplier_ids: &[&str]) -> Result<Vec<&'a Supplier>> {
    supplier_ids.iter().map(|id| catalog.supplier(id)).collect()
}
