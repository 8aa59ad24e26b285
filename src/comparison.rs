//! Puts the emissions of a flight into perspective.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::emissions::CalculationResult;

/// kg CO2 per km driven by an average car
static CAR_CO2_PER_KM: f64 = 0.12;
/// kg CO2 per passenger per km flown in economy class
static COMMERCIAL_FLIGHT_CO2_PER_KM: f64 = 0.09;
/// kg CO2 absorbed by a mature tree in a year
static TREE_CO2_ABSORPTION_PER_YEAR: f64 = 21.0;
/// USD per tonne of CO2 on the voluntary market
static CARBON_OFFSET_COST_MIN: f64 = 15.0;
static CARBON_OFFSET_COST_MAX: f64 = 30.0;

/// Upper bounds (inclusive, kg CO2 / km) of the efficiency buckets
static EFFICIENT_MAX: f64 = 2.5;
static AVERAGE_MAX: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EfficiencyRating {
    Efficient,
    Average,
    HighEmissions,
}

impl EfficiencyRating {
    /// Classifies an emissions factor in kg CO2 / km
    pub fn from_factor(kg_co2_per_km: f64) -> Self {
        if kg_co2_per_km <= EFFICIENT_MAX {
            Self::Efficient
        } else if kg_co2_per_km <= AVERAGE_MAX {
            Self::Average
        } else {
            Self::HighEmissions
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Efficient => "Efficient",
            Self::Average => "Average",
            Self::HighEmissions => "High Emissions",
        }
    }
}

/// A price range in USD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    /// how many times the emissions of driving the same distance by car
    pub car_trips_equivalent: f64,
    /// how many times the emissions of the same passengers on a commercial flight
    pub commercial_flight_comparison: f64,
    /// trees needed for a year to absorb the emissions
    pub trees_needed_to_offset: f64,
    pub carbon_offset_cost: CostRange,
    pub efficiency_rating: EfficiencyRating,
}

impl ComparisonMetrics {
    /// The offset cost of a single passenger
    pub fn per_passenger_offset_cost(&self, passenger_count: f64) -> CostRange {
        CostRange {
            min: self.carbon_offset_cost.min / passenger_count,
            max: self.carbon_offset_cost.max / passenger_count,
        }
    }
}

/// Derives [`ComparisonMetrics`] from the result of [`crate::calculate_emissions`].
/// Each metric depends only on `result`, never on another metric.
pub fn calculate_comparison_metrics(result: &CalculationResult) -> ComparisonMetrics {
    let actual_distance_km = result.flown_km();

    let car_co2 = actual_distance_km * CAR_CO2_PER_KM;
    let commercial_co2 =
        actual_distance_km * COMMERCIAL_FLIGHT_CO2_PER_KM * result.passenger_count;

    ComparisonMetrics {
        car_trips_equivalent: result.total_co2_kg / car_co2,
        commercial_flight_comparison: result.total_co2_kg / commercial_co2,
        trees_needed_to_offset: result.total_co2_kg / TREE_CO2_ABSORPTION_PER_YEAR,
        carbon_offset_cost: CostRange {
            min: result.total_co2_tonnes * CARBON_OFFSET_COST_MIN,
            max: result.total_co2_tonnes * CARBON_OFFSET_COST_MAX,
        },
        efficiency_rating: EfficiencyRating::from_factor(
            result.aircraft.emissions_factor.kg_co2_per_km,
        ),
    }
}
