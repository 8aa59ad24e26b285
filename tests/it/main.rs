use std::sync::Arc;

use jet_emissions::aircraft::{CruiseSpeed, EmissionsFactor, FuelConsumption, PassengerCapacity, Range};
use jet_emissions::*;
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn aircraft(kg_co2_per_km: f64, maximum: u32, range_km: f64) -> AircraftSpec {
    AircraftSpec {
        id: Arc::from("acme-10"),
        model: "10".to_string(),
        manufacturer: "Acme".to_string(),
        category: Category::Heavy,
        passenger_capacity: PassengerCapacity {
            typical: maximum,
            maximum,
        },
        range: Range {
            kilometers: range_km,
            nautical_miles: range_km * 0.539957,
        },
        cruise_speed: CruiseSpeed {
            knots: 480.0,
            kmh: 888.96,
        },
        fuel_consumption: FuelConsumption {
            liters_per_hour: 1500.0,
            gallons_per_hour: 396.3,
        },
        emissions_factor: EmissionsFactor {
            kg_co2_per_km,
            kg_co2_per_nautical_mile: kg_co2_per_km * 1.852,
        },
        year_introduced: Some(2010),
    }
}

fn abs_difference(x: f64, y: f64) -> f64 {
    (x - y).abs()
}

/// A 10 kg/km aircraft flying 1000 km with 4 passengers, one way and back.
#[test]
fn acceptance_emissions() {
    let aircraft = aircraft(10.0, 8, 20000.0);

    let one_way = calculate_emissions(&aircraft, 1000.0, DistanceUnit::Kilometers, 4.0, false);
    assert_eq!(one_way.total_co2_kg, 10000.0);
    assert_eq!(one_way.total_co2_tonnes, 10.0);
    assert_eq!(one_way.per_passenger_co2_tonnes, 2.5);

    let round_trip = calculate_emissions(&aircraft, 1000.0, DistanceUnit::Kilometers, 4.0, true);
    assert_eq!(round_trip.total_co2_kg, 20000.0);
}

#[test]
fn acceptance_comparison() {
    let aircraft = aircraft(10.0, 8, 20000.0);

    let one_way = calculate_emissions(&aircraft, 1000.0, DistanceUnit::Kilometers, 4.0, false);
    let metrics = calculate_comparison_metrics(&one_way);
    assert!(abs_difference(metrics.car_trips_equivalent, 83.33) < 0.01);
    assert!(abs_difference(metrics.trees_needed_to_offset, 476.19) < 0.01);
    assert!(abs_difference(metrics.carbon_offset_cost.min, 150.0) < 1e-9);
    assert!(abs_difference(metrics.carbon_offset_cost.max, 300.0) < 1e-9);
    assert_eq!(metrics.efficiency_rating, EfficiencyRating::HighEmissions);

    let round_trip = calculate_emissions(&aircraft, 1000.0, DistanceUnit::Kilometers, 4.0, true);
    let metrics = calculate_comparison_metrics(&round_trip);
    assert!(abs_difference(metrics.car_trips_equivalent, 20000.0 / (2000.0 * 0.12)) < 1e-9);
}

#[test]
fn acceptance_validation() {
    let v = validate_inputs(None, -5.0, 0.0);
    assert!(!v.is_valid());
    assert_eq!(v.errors.len(), 3);

    let aircraft = aircraft(3.0, 8, 5000.0);
    let v = validate_inputs(Some(&aircraft), 1000.0, 9.0);
    assert!(!v.is_valid());
    assert_eq!(v.errors, vec![InputError::CapacityExceeded { maximum: 8 }]);

    let input = CalculationInput {
        aircraft: Some(&aircraft),
        distance: 1000.0,
        distance_unit: DistanceUnit::Kilometers,
        passenger_count: 9.0,
        round_trip: false,
    };
    assert!(estimate(&input).is_err());
}

/// The range check compares the distance as given with the range in km.
#[test]
fn range_check_is_unit_agnostic() {
    let aircraft = aircraft(3.0, 8, 6000.0);
    // ~8047 km, yet accepted
    let input = CalculationInput {
        aircraft: Some(&aircraft),
        distance: 5000.0,
        distance_unit: DistanceUnit::Miles,
        passenger_count: 2.0,
        round_trip: false,
    };
    assert!(estimate(&input).is_ok());
}

#[test]
fn efficiency_thresholds() {
    let rating = |factor| {
        let result = calculate_emissions(
            &aircraft(factor, 8, 20000.0),
            100.0,
            DistanceUnit::Kilometers,
            1.0,
            false,
        );
        calculate_comparison_metrics(&result).efficiency_rating
    };
    assert_eq!(rating(2.5), EfficiencyRating::Efficient);
    assert_eq!(rating(2.50001), EfficiencyRating::Average);
    assert_eq!(rating(3.5), EfficiencyRating::Average);
    assert_eq!(rating(3.50001), EfficiencyRating::HighEmissions);
}

#[test]
fn embedded_catalog() {
    let catalog = Catalog::embedded().unwrap();
    for spec in catalog.iter() {
        let input = CalculationInput {
            aircraft: Some(spec),
            distance: 500.0,
            distance_unit: DistanceUnit::NauticalMiles,
            passenger_count: spec.passenger_capacity.typical.max(1) as f64,
            round_trip: false,
        };
        let estimate = estimate(&input).unwrap();
        assert!(estimate.result.total_co2_kg > 0.0, "{}", spec.id);
    }
}

proptest! {
    #[test]
    fn same_unit_is_identity(value in 0.0f64..1e7) {
        for unit in DistanceUnit::iter() {
            prop_assert_eq!(convert_distance(value, unit, unit), value);
        }
    }

    #[test]
    fn longer_flights_emit_more(
        distance in 1.0f64..10000.0,
        extra in 1.0f64..1000.0,
        factor in 0.5f64..10.0,
        passengers in 1u32..20,
    ) {
        let aircraft = aircraft(factor, 20, 50000.0);
        for unit in DistanceUnit::iter() {
            let short = calculate_emissions(&aircraft, distance, unit, passengers as f64, false);
            let long = calculate_emissions(&aircraft, distance + extra, unit, passengers as f64, false);
            prop_assert!(long.total_co2_kg > short.total_co2_kg);

            let back = calculate_emissions(&aircraft, distance, unit, passengers as f64, true);
            prop_assert_eq!(back.total_co2_kg, 2.0 * short.total_co2_kg);
        }
    }

    #[test]
    fn per_passenger_adds_up(
        distance in 1.0f64..10000.0,
        factor in 0.5f64..10.0,
        passengers in 1u32..20,
        round_trip in any::<bool>(),
    ) {
        let aircraft = aircraft(factor, 20, 50000.0);
        let result = calculate_emissions(&aircraft, distance, DistanceUnit::Miles, passengers as f64, round_trip);
        prop_assert!(
            abs_difference(result.per_passenger_co2_tonnes * passengers as f64, result.total_co2_tonnes) < 1e-9
        );
    }
}
