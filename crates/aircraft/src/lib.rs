//! Vehicle builders for the studied aircraft.
//!
//! Each module populates one aircraft's vehicle record field by field and
//! derives its flight-phase configurations. The values are the study data;
//! nothing here is computed beyond the derived-field arithmetic the data
//! sheets themselves use.

pub mod airfoils;
pub mod caravan;
pub mod caravan_electric;
pub mod caravan_solar;
pub mod e190_electric;
pub mod skyhawk_electric;

use fleet_vehicle::{ConfigurationError, ConfigurationSet, Vehicle};
use thiserror::Error;

/// Errors raised while building a study aircraft.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no feasible motor speed constant in the candidate grid")]
    InfeasibleMotorSizing,
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// The aircraft covered by the studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyAircraft {
    Caravan,
    CaravanElectric,
    CaravanSolar,
    SkyhawkElectric,
    E190Electric,
}

impl StudyAircraft {
    pub const ALL: [StudyAircraft; 5] = [
        StudyAircraft::Caravan,
        StudyAircraft::CaravanElectric,
        StudyAircraft::CaravanSolar,
        StudyAircraft::SkyhawkElectric,
        StudyAircraft::E190Electric,
    ];

    /// Stable study name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            StudyAircraft::Caravan => "caravan",
            StudyAircraft::CaravanElectric => "caravan-electric",
            StudyAircraft::CaravanSolar => "caravan-solar",
            StudyAircraft::SkyhawkElectric => "skyhawk-electric",
            StudyAircraft::E190Electric => "e190-electric",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Build the base vehicle record.
    pub fn vehicle(&self) -> Result<Vehicle, BuildError> {
        match self {
            StudyAircraft::Caravan => Ok(caravan::vehicle()),
            StudyAircraft::CaravanElectric => caravan_electric::vehicle(),
            StudyAircraft::CaravanSolar => Ok(caravan_solar::vehicle()),
            StudyAircraft::SkyhawkElectric => Ok(skyhawk_electric::vehicle()),
            StudyAircraft::E190Electric => e190_electric::vehicle(),
        }
    }

    /// Derive the flight-phase configurations from a base vehicle.
    pub fn configurations(&self, base: &Vehicle) -> Result<ConfigurationSet, BuildError> {
        match self {
            StudyAircraft::Caravan => caravan::configurations(base),
            StudyAircraft::CaravanElectric => caravan_electric::configurations(base),
            StudyAircraft::CaravanSolar => caravan_solar::configurations(base),
            StudyAircraft::SkyhawkElectric => skyhawk_electric::configurations(base),
            StudyAircraft::E190Electric => e190_electric::configurations(base),
        }
    }
}
