use serde::Serialize;

use crate::aircraft::AircraftSpec;
use crate::comparison::{calculate_comparison_metrics, ComparisonMetrics};
use crate::emissions::{calculate_emissions, CalculationResult};
use crate::units::DistanceUnit;
use crate::validation::{validate_inputs, InputWarning, Validation};

/// What a user asks to be estimated
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput<'a> {
    /// `None` when no aircraft was chosen
    pub aircraft: Option<&'a AircraftSpec>,
    pub distance: f64,
    pub distance_unit: DistanceUnit,
    pub passenger_count: f64,
    pub round_trip: bool,
}

/// The emissions of a flight and how they compare
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub result: CalculationResult,
    pub comparison: ComparisonMetrics,
    pub warnings: Vec<InputWarning>,
}

/// Validates `input` and, only when it is valid, computes its emissions and comparison metrics.
/// # Error
/// Returns the [`Validation`] holding every broken rule when the input is invalid
pub fn estimate(input: &CalculationInput) -> Result<Estimate, Validation> {
    let validation = validate_inputs(input.aircraft, input.distance, input.passenger_count);
    let aircraft = match input.aircraft {
        Some(aircraft) if validation.is_valid() => aircraft,
        _ => return Err(validation),
    };

    let result = calculate_emissions(
        aircraft,
        input.distance,
        input.distance_unit,
        input.passenger_count,
        input.round_trip,
    );
    let comparison = calculate_comparison_metrics(&result);
    log::debug!(
        "{} over {} {}: {:.2} t CO2",
        aircraft.id,
        input.distance,
        input.distance_unit.abbreviation(),
        result.total_co2_tonnes
    );

    Ok(Estimate {
        result,
        comparison,
        warnings: validation.warnings,
    })
}
