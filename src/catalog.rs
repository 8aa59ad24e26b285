use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use itertools::Itertools;

use crate::aircraft::{AircraftRecord, AircraftSpec, Category};

// note: factors were derived from published cruise fuel burn (Jet-A at 0.8 kg/l,
// 3.16 kg CO2 / kg fuel) divided by cruise speed.
static DEFAULT_CATALOG: &[u8] = include_bytes!("./aircraft.csv");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("aircraft `{id}` is invalid: {reason}")]
    InvalidAircraft { id: String, reason: String },
    #[error("aircraft `{0}` appears more than once")]
    DuplicateId(String),
}

/// A read-only table of [`AircraftSpec`], in catalog order, indexed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    aircraft: Vec<AircraftSpec>,
    index: HashMap<Arc<str>, usize>,
}

impl Catalog {
    /// Builds a catalog from specifications, checking each one and rejecting duplicated ids
    pub fn new(aircraft: Vec<AircraftSpec>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(aircraft.len());
        for (position, spec) in aircraft.iter().enumerate() {
            if let Some(reason) = spec.violation() {
                return Err(CatalogError::InvalidAircraft {
                    id: spec.id.to_string(),
                    reason,
                });
            }
            if index.insert(spec.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(spec.id.to_string()));
            }
        }
        Ok(Self { aircraft, index })
    }

    /// Returns the catalog shipped with this crate (`src/aircraft.csv`)
    /// # Error
    /// Errors if the embedded file is corrupt
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_csv(DEFAULT_CATALOG)
    }

    /// Parses a catalog from CSV bytes with one row per aircraft
    pub fn from_csv(data: &[u8]) -> Result<Self, CatalogError> {
        let records = crate::csv::deserialize::<AircraftRecord>(data)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::new(records.into_iter().map(AircraftSpec::from).collect())?;
        log::debug!("catalog with {} aircraft parsed", catalog.len());
        Ok(catalog)
    }

    /// Loads a catalog from a CSV file on disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let records = crate::csv::load::<AircraftRecord>(path)?;
        let catalog = Self::new(records.into_iter().map(AircraftSpec::from).collect())?;
        log::info!(
            "catalog with {} aircraft loaded from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&AircraftSpec> {
        self.index.get(id).map(|position| &self.aircraft[*position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AircraftSpec> {
        self.aircraft.iter()
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Aircraft of a single category, in catalog order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &AircraftSpec> {
        self.aircraft
            .iter()
            .filter(move |spec| spec.category == category)
    }

    /// Groups the catalog by [`Category`], ordered from turboprops to ultra long range.
    /// Categories without aircraft are absent.
    pub fn by_category(&self) -> BTreeMap<Category, Vec<&AircraftSpec>> {
        self.aircraft
            .iter()
            .into_group_map_by(|spec| spec.category)
            .into_iter()
            .collect()
    }
}
