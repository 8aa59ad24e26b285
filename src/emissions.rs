use serde::{Deserialize, Serialize};

use crate::aircraft::AircraftSpec;
use crate::units::{convert_distance, DistanceUnit};

static KG_PER_TONNE: f64 = 1000.0;

/// The emissions of a flight together with the inputs that produced them
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub total_co2_kg: f64,
    pub total_co2_tonnes: f64,
    pub per_passenger_co2_tonnes: f64,
    pub aircraft: AircraftSpec,
    /// the distance as given, in `distance_unit`
    pub distance: f64,
    pub distance_unit: DistanceUnit,
    pub passenger_count: f64,
    pub round_trip: bool,
}

impl CalculationResult {
    /// The one-way distance in km
    pub fn distance_km(&self) -> f64 {
        convert_distance(self.distance, self.distance_unit, DistanceUnit::Kilometers)
    }

    /// The distance flown in km, i.e. doubled on round trips
    pub fn flown_km(&self) -> f64 {
        self.distance_km() * trips(self.round_trip)
    }
}

fn trips(round_trip: bool) -> f64 {
    if round_trip {
        2.0
    } else {
        1.0
    }
}

/// Returns the CO2 emitted by `aircraft` flying `distance` (twice when `round_trip`),
/// shared among `passenger_count` passengers.
///
/// # Contract
/// `distance` and `passenger_count` must be positive; use [`crate::validate_inputs`] first.
/// A `passenger_count` of zero yields an infinite (or NaN) per-passenger value.
pub fn calculate_emissions(
    aircraft: &AircraftSpec,
    distance: f64,
    distance_unit: DistanceUnit,
    passenger_count: f64,
    round_trip: bool,
) -> CalculationResult {
    let distance_km = convert_distance(distance, distance_unit, DistanceUnit::Kilometers);

    let total_co2_kg = distance_km * aircraft.emissions_factor.kg_co2_per_km * trips(round_trip);
    let total_co2_tonnes = total_co2_kg / KG_PER_TONNE;
    let per_passenger_co2_tonnes = total_co2_tonnes / passenger_count;

    CalculationResult {
        total_co2_kg,
        total_co2_tonnes,
        per_passenger_co2_tonnes,
        aircraft: aircraft.clone(),
        distance,
        distance_unit,
        passenger_count,
        round_trip,
    }
}
