//! Conceptual-aircraft definition studies: vehicle records, flight-phase
//! configurations, and mission plans for a small electrified fleet.
//!
//! The heavy analyses (weights, aerodynamics, stability, energy, and the
//! sequential-segment mission solver) live in the external framework these
//! records are handed to. Keeping the definitions in a library crate lets
//! the CLI, the plotting binary, and the test suite share them.

pub use fleet_aircraft as aircraft;
pub use fleet_config as config;
pub use fleet_export as export;
pub use fleet_mission as mission;
pub use fleet_propulsion as propulsion;
pub use fleet_vehicle as vehicle;

pub use fleet_core::{atmosphere, constants, units};

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
