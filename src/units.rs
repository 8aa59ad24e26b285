use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

static MI_TO_KM: f64 = 1.60934;
static NM_TO_KM: f64 = 1.852;
static KM_TO_MI: f64 = 0.621371;
static KM_TO_NM: f64 = 0.539957;

/// A unit of distance accepted by the calculator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DistanceUnit {
    #[strum(to_string = "miles", serialize = "mi")]
    Miles,
    #[strum(to_string = "kilometers", serialize = "km")]
    Kilometers,
    #[strum(to_string = "nautical-miles", serialize = "nm")]
    NauticalMiles,
}

impl DistanceUnit {
    /// Short symbol of the unit (e.g. `nm`)
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Miles => "mi",
            Self::Kilometers => "km",
            Self::NauticalMiles => "nm",
        }
    }

    /// Human readable name of the unit (e.g. `nautical miles`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Miles => "miles",
            Self::Kilometers => "kilometers",
            Self::NauticalMiles => "nautical miles",
        }
    }

    fn km_per_unit(self) -> f64 {
        match self {
            Self::Miles => MI_TO_KM,
            Self::NauticalMiles => NM_TO_KM,
            Self::Kilometers => 1.0,
        }
    }

    fn units_per_km(self) -> f64 {
        match self {
            Self::Miles => KM_TO_MI,
            Self::NauticalMiles => KM_TO_NM,
            Self::Kilometers => 1.0,
        }
    }
}

/// Converts `value` from `from` to `to`, passing through kilometers.
/// Same-unit conversions return `value` untouched.
pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.km_per_unit() * to.units_per_km()
}
