//! # matsel Core
//!
//! Core records for the matsel material selection engine.
//!
//! This crate provides the data every other matsel crate works on:
//!
//! - [`Material`] / [`Supplier`] - immutable catalog records
//! - [`Catalog`] - validated, frozen table of materials and suppliers
//! - [`ProjectSpecification`] - typed project requirements
//! - [`Vector`] - dense feature vector with Euclidean distance
//!
//! ## Example
//!
//! ```rust
//! use matsel_core::{Application, Catalog, ProjectSpecification};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 15);
//!
//! let spec = ProjectSpecification::builder([Application::Foundation])
//!     .min_strength_mpa(50.0)
//!     .budget(150.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(spec.budget_constraint, Some(150.0));
//! ```

pub mod builtin;
pub mod catalog;
pub mod error;
pub mod material;
pub mod spec;
pub mod vector;

pub use catalog::{Catalog, CatalogData};
pub use error::{Error, Result};
pub use material::{
    Application, Material, MaterialType, PriceLevel, Supplier, WeatherCondition,
    WeatherResistance,
};
pub use spec::{
    EnvironmentalConditions, InstallationTolerance, ProjectSpecification, SpecificationBuilder,
    ThermalPreference,
};
pub use vector::Vector;
