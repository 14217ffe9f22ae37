//! Material and supplier records
//!
//! Records are plain data: they are loaded once, validated by the
//! [`Catalog`](crate::Catalog) and never mutated afterwards.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Material category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaterialType {
    Concrete,
    Steel,
    Wood,
    Brick,
    Glass,
    Aluminum,
    Stone,
    Ceramic,
    Plastic,
    Composite,
}

impl MaterialType {
    pub const ALL: [MaterialType; 10] = [
        MaterialType::Concrete,
        MaterialType::Steel,
        MaterialType::Wood,
        MaterialType::Brick,
        MaterialType::Glass,
        MaterialType::Aluminum,
        MaterialType::Stone,
        MaterialType::Ceramic,
        MaterialType::Plastic,
        MaterialType::Composite,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Concrete => "Concrete",
            MaterialType::Steel => "Steel",
            MaterialType::Wood => "Wood",
            MaterialType::Brick => "Brick",
            MaterialType::Glass => "Glass",
            MaterialType::Aluminum => "Aluminum",
            MaterialType::Stone => "Stone",
            MaterialType::Ceramic => "Ceramic",
            MaterialType::Plastic => "Plastic",
            MaterialType::Composite => "Composite",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in a building a material can be used
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Application {
    Foundation,
    Structural,
    Roofing,
    Flooring,
    Wall,
    Insulation,
    Facade,
    Windows,
    Doors,
    #[serde(rename = "Interior Finishing")]
    InteriorFinishing,
}

impl Application {
    pub const ALL: [Application; 10] = [
        Application::Foundation,
        Application::Structural,
        Application::Roofing,
        Application::Flooring,
        Application::Wall,
        Application::Insulation,
        Application::Facade,
        Application::Windows,
        Application::Doors,
        Application::InteriorFinishing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Application::Foundation => "Foundation",
            Application::Structural => "Structural",
            Application::Roofing => "Roofing",
            Application::Flooring => "Flooring",
            Application::Wall => "Wall",
            Application::Insulation => "Insulation",
            Application::Facade => "Facade",
            Application::Windows => "Windows",
            Application::Doors => "Doors",
            Application::InteriorFinishing => "Interior Finishing",
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four weather exposures a material is rated against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Heat,
    Cold,
    Humidity,
    Uv,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Heat,
        WeatherCondition::Cold,
        WeatherCondition::Humidity,
        WeatherCondition::Uv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Heat => "heat",
            WeatherCondition::Cold => "cold",
            WeatherCondition::Humidity => "humidity",
            WeatherCondition::Uv => "uv",
        }
    }
}

/// Per-condition resistance ratings, each on a 0-10 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherResistance {
    pub heat: f64,
    pub cold: f64,
    pub humidity: f64,
    pub uv: f64,
}

impl WeatherResistance {
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
}

/// Supplier price band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceLevel {
    Low,
    Medium,
    High,
}

/// A construction material
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub applications: BTreeSet<Application>,
    pub strength_mpa: f64,
    pub durability_years: u32,
    /// W/(m·K)
    pub thermal_conductivity: f64,
    pub fire_resistance_hours: f64,
    pub water_resistance: f64,
    pub eco_friendly_score: f64,
    pub cost_per_unit: f64,
    pub availability: f64,
    pub maintenance_requirement: f64,
    pub installation_complexity: f64,
    pub weather_resistance: WeatherResistance,
    pub supplier_id: String,
}

impl Material {
    /// Whether the material lists the given application
    pub fn supports(&self, application: Application) -> bool {
        self.applications.contains(&application)
    }

    /// Check attribute ranges
    pub fn validate(&self) -> Result<()> {
        let fail = |what: &str| {
            Err(Error::InvalidCatalog(format!(
                "material {} ({}): {}",
                self.id, self.name, what
            )))
        };

        if self.applications.is_empty() {
            return fail("applications cannot be empty");
        }

        let non_negative = [
            ("strength_mpa", self.strength_mpa),
            ("thermal_conductivity", self.thermal_conductivity),
            ("fire_resistance_hours", self.fire_resistance_hours),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return fail(&format!("{field} must be a finite value >= 0, got {value}"));
            }
        }

        if !self.cost_per_unit.is_finite() || self.cost_per_unit <= 0.0 {
            return fail(&format!("cost_per_unit must be > 0, got {}", self.cost_per_unit));
        }

        let ratings = [
            ("water_resistance", self.water_resistance),
            ("eco_friendly_score", self.eco_friendly_score),
            ("availability", self.availability),
            ("maintenance_requirement", self.maintenance_requirement),
            ("installation_complexity", self.installation_complexity),
        ];
        for (field, value) in ratings {
            if !is_rating(value) {
                return fail(&format!("{field} must be within 0-10, got {value}"));
            }
        }

        for condition in WeatherCondition::ALL {
            let value = self.weather_resistance.get(condition);
            if !is_rating(value) {
                return fail(&format!(
                    "weather_resistance.{} must be within 0-10, got {value}",
                    condition.as_str()
                ));
            }
        }

        Ok(())
    }
}

/// A material supplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub supplier_id: String,
    pub name: String,
    pub location: String,
    pub delivery_time_days: u32,
    pub reliability_score: f64,
    pub price_level: PriceLevel,
    pub contact: String,
}

impl Supplier {
    pub fn validate(&self) -> Result<()> {
        if self.delivery_time_days == 0 {
            return Err(Error::InvalidCatalog(format!(
                "supplier {}: delivery_time_days must be > 0",
                self.supplier_id
            )));
        }
        if !is_rating(self.reliability_score) {
            return Err(Error::InvalidCatalog(format!(
                "supplier {}: reliability_score must be within 0-10, got {}",
                self.supplier_id, self.reliability_score
            )));
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn is_rating(value: f64) -> bool {
    value.is_finite() && (0.0..=10.0).contains(&value)
}
