//! Built-in fallback catalog
//!
//! Used when no external catalog source is configured or the configured
//! source cannot be loaded. Costs are per the unit each material is sold
//! in (cubic meter, metric ton, square meter or 1000 bricks).

use crate::{Application, Catalog, Material, MaterialType, PriceLevel, Supplier, WeatherResistance};

struct Properties {
    strength_mpa: f64,
    durability_years: u32,
    thermal_conductivity: f64,
    fire_resistance_hours: f64,
    water_resistance: f64,
    eco_friendly_score: f64,
    cost_per_unit: f64,
    availability: f64,
    maintenance_requirement: f64,
    installation_complexity: f64,
}

fn material(
    id: u32,
    name: &str,
    material_type: MaterialType,
    applications: &[Application],
    props: Properties,
    weather_resistance: WeatherResistance,
    supplier_id: &str,
) -> Material {
    Material {
        id,
        name: name.to_string(),
        material_type,
        applications: applications.iter().copied().collect(),
        strength_mpa: props.strength_mpa,
        durability_years: props.durability_years,
        thermal_conductivity: props.thermal_conductivity,
        fire_resistance_hours: props.fire_resistance_hours,
        water_resistance: props.water_resistance,
        eco_friendly_score: props.eco_friendly_score,
        cost_per_unit: props.cost_per_unit,
        availability: props.availability,
        maintenance_requirement: props.maintenance_requirement,
        installation_complexity: props.installation_complexity,
        weather_resistance,
        supplier_id: supplier_id.to_string(),
    }
}

fn supplier(
    supplier_id: &str,
    name: &str,
    location: &str,
    delivery_time_days: u32,
    reliability_score: f64,
    price_level: PriceLevel,
    contact: &str,
) -> Supplier {
    Supplier {
        supplier_id: supplier_id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        delivery_time_days,
        reliability_score,
        price_level,
        contact: contact.to_string(),
    }
}

/// The 15 built-in materials, in catalog order
pub fn builtin_materials() -> Vec<Material> {
    vec![
        material(
            1,
            "Standard Portland Cement Concrete",
            MaterialType::Concrete,
            &[Application::Foundation, Application::Structural, Application::Flooring],
            Properties {
                strength_mpa: 25.0,
                durability_years: 50,
                thermal_conductivity: 1.7,
                fire_resistance_hours: 4.0,
                water_resistance: 8.0,
                eco_friendly_score: 4.0,
                cost_per_unit: 110.0,
                availability: 9.0,
                maintenance_requirement: 3.0,
                installation_complexity: 5.0,
            },
            WeatherResistance::new(9.0, 7.0, 8.0, 8.0),
            "SUP001",
        ),
        material(
            2,
            "High-Strength Concrete",
            MaterialType::Concrete,
            &[Application::Foundation, Application::Structural],
            Properties {
                strength_mpa: 60.0,
                durability_years: 75,
                thermal_conductivity: 1.6,
                fire_resistance_hours: 4.5,
                water_resistance: 9.0,
                eco_friendly_score: 3.0,
                cost_per_unit: 180.0,
                availability: 7.0,
                maintenance_requirement: 2.0,
                installation_complexity: 6.0,
            },
            WeatherResistance::new(9.0, 8.0, 9.0, 8.0),
            "SUP002",
        ),
        material(
            3,
            "Structural Steel (A36)",
            MaterialType::Steel,
            &[Application::Structural],
            Properties {
                strength_mpa: 400.0,
                durability_years: 60,
                thermal_conductivity: 45.0,
                fire_resistance_hours: 0.5,
                water_resistance: 4.0,
                eco_friendly_score: 6.0,
                cost_per_unit: 2000.0,
                availability: 8.0,
                maintenance_requirement: 5.0,
                installation_complexity: 7.0,
            },
            WeatherResistance::new(6.0, 8.0, 3.0, 7.0),
            "SUP003",
        ),
        material(
            4,
            "Stainless Steel (316)",
            MaterialType::Steel,
            &[Application::Structural, Application::Facade],
            Properties {
                strength_mpa: 290.0,
                durability_years: 100,
                thermal_conductivity: 16.0,
                fire_resistance_hours: 0.75,
                water_resistance: 9.0,
                eco_friendly_score: 7.0,
                cost_per_unit: 4500.0,
                availability: 6.0,
                maintenance_requirement: 2.0,
                installation_complexity: 8.0,
            },
            WeatherResistance::new(9.0, 9.0, 9.0, 9.0),
            "SUP004",
        ),
        material(
            5,
            "Douglas Fir Lumber",
            MaterialType::Wood,
            &[Application::Structural, Application::Flooring],
            Properties {
                strength_mpa: 85.0,
                durability_years: 25,
                thermal_conductivity: 0.12,
                fire_resistance_hours: 0.75,
                water_resistance: 3.0,
                eco_friendly_score: 8.0,
                cost_per_unit: 600.0,
                availability: 7.0,
                maintenance_requirement: 7.0,
                installation_complexity: 4.0,
            },
            WeatherResistance::new(5.0, 7.0, 4.0, 3.0),
            "SUP005",
        ),
        material(
            6,
            "Pressure-Treated Pine",
            MaterialType::Wood,
            &[Application::Structural, Application::Flooring, Application::Wall],
            Properties {
                strength_mpa: 70.0,
                durability_years: 40,
                thermal_conductivity: 0.15,
                fire_resistance_hours: 0.5,
                water_resistance: 7.0,
                eco_friendly_score: 6.0,
                cost_per_unit: 750.0,
                availability: 9.0,
                maintenance_requirement: 5.0,
                installation_complexity: 3.0,
            },
            WeatherResistance::new(6.0, 7.0, 6.0, 5.0),
            "SUP006",
        ),
        material(
            7,
            "Clay Brick",
            MaterialType::Brick,
            &[Application::Wall, Application::Facade],
            Properties {
                strength_mpa: 15.0,
                durability_years: 100,
                thermal_conductivity: 0.6,
                fire_resistance_hours: 6.0,
                water_resistance: 7.0,
                eco_friendly_score: 7.0,
                cost_per_unit: 400.0,
                availability: 9.0,
                maintenance_requirement: 2.0,
                installation_complexity: 6.0,
            },
            WeatherResistance::new(9.0, 8.0, 7.0, 9.0),
            "SUP007",
        ),
        material(
            8,
            "Tempered Glass",
            MaterialType::Glass,
            &[Application::Windows, Application::Doors, Application::Facade],
            Properties {
                strength_mpa: 100.0,
                durability_years: 30,
                thermal_conductivity: 1.0,
                fire_resistance_hours: 0.25,
                water_resistance: 10.0,
                eco_friendly_score: 6.0,
                cost_per_unit: 70.0,
                availability: 8.0,
                maintenance_requirement: 4.0,
                installation_complexity: 7.0,
            },
            WeatherResistance::new(7.0, 7.0, 10.0, 7.0),
            "SUP008",
        ),
        material(
            9,
            "Low-E Insulated Glass",
            MaterialType::Glass,
            &[Application::Windows, Application::Facade],
            Properties {
                strength_mpa: 90.0,
                durability_years: 35,
                thermal_conductivity: 0.5,
                fire_resistance_hours: 0.25,
                water_resistance: 10.0,
                eco_friendly_score: 8.0,
                cost_per_unit: 120.0,
                availability: 7.0,
                maintenance_requirement: 3.0,
                installation_complexity: 8.0,
            },
            WeatherResistance::new(9.0, 9.0, 10.0, 9.0),
            "SUP009",
        ),
        material(
            10,
            "Aluminum Alloy 6061",
            MaterialType::Aluminum,
            &[Application::Structural, Application::Facade, Application::Windows, Application::Doors],
            Properties {
                strength_mpa: 310.0,
                durability_years: 40,
                thermal_conductivity: 167.0,
                fire_resistance_hours: 0.1,
                water_resistance: 8.0,
                eco_friendly_score: 8.0,
                cost_per_unit: 3000.0,
                availability: 8.0,
                maintenance_requirement: 3.0,
                installation_complexity: 5.0,
            },
            WeatherResistance::new(7.0, 9.0, 8.0, 9.0),
            "SUP010",
        ),
        material(
            11,
            "Granite",
            MaterialType::Stone,
            &[Application::Flooring, Application::Facade, Application::InteriorFinishing],
            Properties {
                strength_mpa: 170.0,
                durability_years: 100,
                thermal_conductivity: 2.8,
                fire_resistance_hours: 6.0,
                water_resistance: 8.0,
                eco_friendly_score: 6.0,
                cost_per_unit: 200.0,
                availability: 6.0,
                maintenance_requirement: 3.0,
                installation_complexity: 7.0,
            },
            WeatherResistance::new(9.0, 9.0, 8.0, 9.0),
            "SUP011",
        ),
        material(
            12,
            "Porcelain Tile",
            MaterialType::Ceramic,
            &[Application::Flooring, Application::Wall, Application::InteriorFinishing],
            Properties {
                strength_mpa: 35.0,
                durability_years: 50,
                thermal_conductivity: 1.5,
                fire_resistance_hours: 5.0,
                water_resistance: 9.0,
                eco_friendly_score: 6.0,
                cost_per_unit: 30.0,
                availability: 9.0,
                maintenance_requirement: 2.0,
                installation_complexity: 5.0,
            },
            WeatherResistance::new(9.0, 8.0, 9.0, 9.0),
            "SUP012",
        ),
        material(
            13,
            "PVC",
            MaterialType::Plastic,
            &[Application::Doors, Application::Windows, Application::InteriorFinishing],
            Properties {
                strength_mpa: 55.0,
                durability_years: 35,
                thermal_conductivity: 0.19,
                fire_resistance_hours: 0.2,
                water_resistance: 10.0,
                eco_friendly_score: 3.0,
                cost_per_unit: 25.0,
                availability: 10.0,
                maintenance_requirement: 2.0,
                installation_complexity: 3.0,
            },
            WeatherResistance::new(5.0, 8.0, 10.0, 4.0),
            "SUP013",
        ),
        material(
            14,
            "Fiber Cement Board",
            MaterialType::Composite,
            &[Application::Wall, Application::Facade, Application::Roofing],
            Properties {
                strength_mpa: 20.0,
                durability_years: 50,
                thermal_conductivity: 0.25,
                fire_resistance_hours: 2.0,
                water_resistance: 9.0,
                eco_friendly_score: 7.0,
                cost_per_unit: 18.0,
                availability: 8.0,
                maintenance_requirement: 2.0,
                installation_complexity: 4.0,
            },
            WeatherResistance::new(8.0, 8.0, 9.0, 8.0),
            "SUP014",
        ),
        material(
            15,
            "Composite Decking",
            MaterialType::Composite,
            &[Application::Flooring],
            Properties {
                strength_mpa: 25.0,
                durability_years: 30,
                thermal_conductivity: 0.22,
                fire_resistance_hours: 1.0,
                water_resistance: 9.0,
                eco_friendly_score: 8.0,
                cost_per_unit: 65.0,
                availability: 7.0,
                maintenance_requirement: 2.0,
                installation_complexity: 4.0,
            },
            WeatherResistance::new(7.0, 8.0, 9.0, 7.0),
            "SUP015",
        ),
    ]
}

/// The 15 built-in suppliers
pub fn builtin_suppliers() -> Vec<Supplier> {
    vec![
        supplier("SUP001", "ConcreteWorks Inc.", "Chicago, IL", 3, 8.0, PriceLevel::Medium, "sales@concreteworks.com"),
        supplier("SUP002", "Premium Concrete Solutions", "Denver, CO", 5, 9.0, PriceLevel::High, "orders@premiumconcrete.com"),
        supplier("SUP003", "American Steel Corp", "Pittsburgh, PA", 7, 9.0, PriceLevel::Medium, "sales@americansteel.com"),
        supplier("SUP004", "Superior Stainless", "Cleveland, OH", 10, 8.0, PriceLevel::High, "orders@superiorstainless.com"),
        supplier("SUP005", "Northwest Timber", "Seattle, WA", 5, 7.0, PriceLevel::Medium, "info@nwtimber.com"),
        supplier("SUP006", "Southern Pine Products", "Atlanta, GA", 4, 8.0, PriceLevel::Medium, "sales@southernpine.com"),
        supplier("SUP007", "Classic Brick Co.", "Philadelphia, PA", 6, 9.0, PriceLevel::Medium, "orders@classicbrick.com"),
        supplier("SUP008", "Crystal Glass Works", "Minneapolis, MN", 8, 7.0, PriceLevel::Medium, "sales@crystalglass.com"),
        supplier("SUP009", "Advanced Glass Technologies", "San Francisco, CA", 12, 9.0, PriceLevel::High, "info@advancedglass.com"),
        supplier("SUP010", "Aluminum Systems Inc.", "Houston, TX", 6, 8.0, PriceLevel::Medium, "orders@aluminumsystems.com"),
        supplier("SUP011", "Granite Mountain Quarries", "Barre, VT", 15, 9.0, PriceLevel::High, "sales@granitemountain.com"),
        supplier("SUP012", "Ceramic Tile Distributors", "Miami, FL", 5, 7.0, PriceLevel::Low, "orders@ceramictile.com"),
        supplier("SUP013", "Modern Plastics Corp", "Dallas, TX", 4, 8.0, PriceLevel::Low, "sales@modernplastics.com"),
        supplier("SUP014", "Composite Building Products", "Portland, OR", 7, 8.0, PriceLevel::Medium, "info@compositebuilding.com"),
        supplier("SUP015", "Eco Composite Materials", "Austin, TX", 9, 7.0, PriceLevel::Medium, "sales@ecocomposite.com"),
    ]
}

impl Catalog {
    /// The built-in fallback catalog
    pub fn builtin() -> Catalog {
        Catalog::new(builtin_materials(), builtin_suppliers())
            .unwrap_or_else(|e| panic!("built-in catalog is invalid: {e}"))
    }
}
