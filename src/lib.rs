//! Estimates the CO2 emitted by private jet flights and puts it into perspective.
//!
//! The calculation is a pure pipeline: [`validate_inputs`] gates the inputs,
//! [`calculate_emissions`] computes the emissions of an [`AircraftSpec`] over a distance
//! and [`calculate_comparison_metrics`] compares them to cars, commercial flights and trees.
//! [`estimate`] runs the three in order.
#![forbid(unsafe_code)]
pub mod aircraft;
mod catalog;
mod comparison;
mod csv;
mod emissions;
mod estimate;
pub mod format;
mod routes;
mod units;
mod validation;

pub use aircraft::{AircraftSpec, Category};
pub use catalog::*;
pub use comparison::*;
pub use emissions::*;
pub use estimate::*;
pub use routes::*;
pub use units::*;
pub use validation::*;
