//! In-memory representation of the aircraft specifications used by the calculator.
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The market category of a business aircraft
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Turboprop,
    VeryLight,
    Light,
    Midsize,
    SuperMidsize,
    Heavy,
    UltraLongRange,
}

impl Category {
    /// The name shown to users (e.g. `Super Midsize Jet`)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Turboprop => "Turboprop",
            Self::VeryLight => "Very Light Jet",
            Self::Light => "Light Jet",
            Self::Midsize => "Midsize Jet",
            Self::SuperMidsize => "Super Midsize Jet",
            Self::Heavy => "Heavy Jet",
            Self::UltraLongRange => "Ultra Long Range",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PassengerCapacity {
    pub typical: u32,
    pub maximum: u32,
}

/// Range of the aircraft; both fields describe the same distance
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub kilometers: f64,
    pub nautical_miles: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CruiseSpeed {
    pub knots: f64,
    pub kmh: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FuelConsumption {
    pub liters_per_hour: f64,
    pub gallons_per_hour: f64,
}

/// CO2 emitted per distance flown; both fields describe the same rate
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct EmissionsFactor {
    pub kg_co2_per_km: f64,
    pub kg_co2_per_nautical_mile: f64,
}

/// The specification of an aircraft model (e.g. `Gulfstream G650`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AircraftSpec {
    /// Opaque identifier of the model (e.g. `gulfstream-g650`)
    pub id: Arc<str>,
    pub model: String,
    pub manufacturer: String,
    pub category: Category,
    pub passenger_capacity: PassengerCapacity,
    pub range: Range,
    /// Only used for display
    pub cruise_speed: CruiseSpeed,
    /// Only used for display
    pub fuel_consumption: FuelConsumption,
    pub emissions_factor: EmissionsFactor,
    pub year_introduced: Option<u16>,
}

impl AircraftSpec {
    /// Manufacturer followed by model (e.g. `Gulfstream G650`)
    pub fn name(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }

    /// Returns the first broken invariant of this specification, if any.
    pub(crate) fn violation(&self) -> Option<String> {
        let numbers = [
            ("range.kilometers", self.range.kilometers),
            ("range.nautical_miles", self.range.nautical_miles),
            ("cruise_speed.knots", self.cruise_speed.knots),
            ("cruise_speed.kmh", self.cruise_speed.kmh),
            ("fuel_consumption.liters_per_hour", self.fuel_consumption.liters_per_hour),
            ("fuel_consumption.gallons_per_hour", self.fuel_consumption.gallons_per_hour),
            ("emissions_factor.kg_co2_per_km", self.emissions_factor.kg_co2_per_km),
            (
                "emissions_factor.kg_co2_per_nautical_mile",
                self.emissions_factor.kg_co2_per_nautical_mile,
            ),
        ];
        if let Some((field, value)) = numbers
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Some(format!("{field} must be a non-negative number, got {value}"));
        }

        let capacity = self.passenger_capacity;
        (capacity.maximum < capacity.typical).then(|| {
            format!(
                "maximum capacity ({}) is lower than typical capacity ({})",
                capacity.maximum, capacity.typical
            )
        })
    }
}

/// A row of the catalog CSV. CSV has no nesting, so every measure is its own column.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct AircraftRecord {
    pub id: String,
    pub model: String,
    pub manufacturer: String,
    pub category: Category,
    pub capacity_typical: u32,
    pub capacity_maximum: u32,
    pub range_km: f64,
    pub range_nm: f64,
    pub cruise_knots: f64,
    pub cruise_kmh: f64,
    pub fuel_lph: f64,
    pub fuel_gph: f64,
    pub kg_co2_per_km: f64,
    pub kg_co2_per_nm: f64,
    pub year_introduced: Option<u16>,
}

impl From<AircraftRecord> for AircraftSpec {
    fn from(r: AircraftRecord) -> Self {
        Self {
            id: r.id.into(),
            model: r.model,
            manufacturer: r.manufacturer,
            category: r.category,
            passenger_capacity: PassengerCapacity {
                typical: r.capacity_typical,
                maximum: r.capacity_maximum,
            },
            range: Range {
                kilometers: r.range_km,
                nautical_miles: r.range_nm,
            },
            cruise_speed: CruiseSpeed {
                knots: r.cruise_knots,
                kmh: r.cruise_kmh,
            },
            fuel_consumption: FuelConsumption {
                liters_per_hour: r.fuel_lph,
                gallons_per_hour: r.fuel_gph,
            },
            emissions_factor: EmissionsFactor {
                kg_co2_per_km: r.kg_co2_per_km,
                kg_co2_per_nautical_mile: r.kg_co2_per_nm,
            },
            year_introduced: r.year_introduced,
        }
    }
}

/// Test helper to build an aircraft with a given emissions factor and capacity
#[cfg(test)]
pub(crate) fn synthetic(kg_co2_per_km: f64, maximum: u32, range_km: f64) -> AircraftSpec {
    AircraftSpec {
        id: "synthetic".into(),
        model: "Test".to_string(),
        manufacturer: "Acme".to_string(),
        category: Category::Midsize,
        passenger_capacity: PassengerCapacity {
            typical: maximum.min(6),
            maximum,
        },
        range: Range {
            kilometers: range_km,
            nautical_miles: range_km * 0.539957,
        },
        cruise_speed: CruiseSpeed {
            knots: 450.0,
            kmh: 833.4,
        },
        fuel_consumption: FuelConsumption {
            liters_per_hour: 1000.0,
            gallons_per_hour: 264.2,
        },
        emissions_factor: EmissionsFactor {
            kg_co2_per_km,
            kg_co2_per_nautical_mile: kg_co2_per_km * 1.852,
        },
        year_introduced: None,
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn category_names() {
        assert_eq!(Category::from_str("super-midsize"), Ok(Category::SuperMidsize));
        assert_eq!(Category::UltraLongRange.to_string(), "ultra-long-range");
        for category in Category::iter() {
            assert_eq!(Category::from_str(&category.to_string()), Ok(category));
            assert!(!category.display_name().is_empty());
        }
    }

    #[test]
    fn valid_spec() {
        let spec = synthetic(3.0, 8, 5000.0);
        assert_eq!(spec.violation(), None);
        assert_eq!(spec.name(), "Acme Test");
    }

    #[test]
    fn negative_number() {
        let mut spec = synthetic(3.0, 8, 5000.0);
        spec.emissions_factor.kg_co2_per_km = -1.0;
        assert!(spec
            .violation()
            .unwrap()
            .starts_with("emissions_factor.kg_co2_per_km"));
    }

    #[test]
    fn capacity_inverted() {
        let mut spec = synthetic(3.0, 8, 5000.0);
        spec.passenger_capacity.typical = 9;
        assert_eq!(
            spec.violation(),
            Some("maximum capacity (8) is lower than typical capacity (9)".to_string())
        );
    }
}
