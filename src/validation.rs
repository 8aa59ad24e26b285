use serde::Serialize;

use crate::aircraft::AircraftSpec;
use crate::format::format_locale;

/// A reason why a calculation cannot be performed
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum InputError {
    #[error("Please select an aircraft")]
    MissingAircraft,
    #[error("Distance must be greater than 0")]
    NonPositiveDistance,
    #[error("Passenger count must be at least 1")]
    NonPositivePassengers,
    #[error("Passenger count exceeds aircraft maximum capacity of {maximum}")]
    CapacityExceeded { maximum: u32 },
    #[error("Distance exceeds aircraft range of {} km", kilometers(.range_km))]
    RangeExceeded { range_km: f64 },
}

fn kilometers(value: &f64) -> String {
    format_locale(*value)
}

/// Something worth telling the user that does not prevent the calculation
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum InputWarning {
    #[error("Passenger count exceeds typical capacity of {typical}")]
    AboveTypicalCapacity { typical: u32 },
}

/// The outcome of [`validate_inputs`]. Errors are kept in the order the rules are checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Validation {
    pub errors: Vec<InputError>,
    pub warnings: Vec<InputWarning>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors as user-facing messages
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

impl std::fmt::Display for Validation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for Validation {}

/// Checks whether a calculation may be performed. Every rule is checked, so all
/// problems are reported at once.
///
/// Note that `distance` is compared to the range in km as is, whatever unit it is in.
pub fn validate_inputs(
    aircraft: Option<&AircraftSpec>,
    distance: f64,
    passenger_count: f64,
) -> Validation {
    let mut validation = Validation::default();
    let errors = &mut validation.errors;

    if aircraft.is_none() {
        errors.push(InputError::MissingAircraft);
    }
    if distance <= 0.0 {
        errors.push(InputError::NonPositiveDistance);
    }
    if passenger_count <= 0.0 {
        errors.push(InputError::NonPositivePassengers);
    }

    if let Some(aircraft) = aircraft {
        let capacity = aircraft.passenger_capacity;
        if passenger_count > capacity.maximum as f64 {
            errors.push(InputError::CapacityExceeded {
                maximum: capacity.maximum,
            });
        } else if passenger_count > capacity.typical as f64 {
            validation.warnings.push(InputWarning::AboveTypicalCapacity {
                typical: capacity.typical,
            });
        }

        if distance > aircraft.range.kilometers {
            errors.push(InputError::RangeExceeded {
                range_km: aircraft.range.kilometers,
            });
        }
    }

    if !validation.is_valid() {
        log::debug!("invalid inputs: {validation}");
    }
    validation
}
