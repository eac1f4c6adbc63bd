//! Named flight-phase configurations derived from a base vehicle.
//!
//! A configuration is a clone of the base vehicle with a handful of
//! overrides applied (flap and slat deflections, propeller speed, takeoff
//! and landing speed ratios). The base vehicle is never mutated.

use thiserror::Error;

use crate::vehicle::Vehicle;

/// Errors raised while applying configuration overrides.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("vehicle has no wing tagged '{0}'")]
    UnknownWing(String),
    #[error("wing '{wing}' has no control surface tagged '{surface}'")]
    UnknownControlSurface { wing: String, surface: String },
}

/// A named variant of the base vehicle for one flight phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub tag: String,
    pub vehicle: Vehicle,
    /// Commanded propeller speed for this phase (rad/s).
    pub propeller_speed_rad_s: Option<f64>,
    /// Takeoff safety speed over stall speed.
    pub v2_vs_ratio: Option<f64>,
    /// Reference approach speed over stall speed.
    pub vref_vs_ratio: Option<f64>,
    pub maximum_lift_coefficient: Option<f64>,
}

impl Configuration {
    /// Clone the base vehicle into a configuration with no overrides yet.
    pub fn derived(base: &Vehicle, tag: &str) -> Self {
        Configuration {
            tag: tag.to_string(),
            vehicle: base.clone(),
            propeller_speed_rad_s: None,
            v2_vs_ratio: None,
            vref_vs_ratio: None,
            maximum_lift_coefficient: None,
        }
    }

    /// Set the deflection of a control surface on one wing.
    pub fn set_deflection(
        &mut self,
        wing_tag: &str,
        surface_tag: &str,
        deflection_rad: f64,
    ) -> Result<(), ConfigurationError> {
        let wing = self
            .vehicle
            .wing_mut(wing_tag)
            .ok_or_else(|| ConfigurationError::UnknownWing(wing_tag.to_string()))?;
        let surface = wing.control_surface_mut(surface_tag).ok_or_else(|| {
            ConfigurationError::UnknownControlSurface {
                wing: wing_tag.to_string(),
                surface: surface_tag.to_string(),
            }
        })?;
        surface.deflection_rad = deflection_rad;
        Ok(())
    }
}

/// Ordered, tag-addressable collection of configurations. The first entry
/// is the base configuration by convention.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationSet {
    configurations: Vec<Configuration>,
}

impl ConfigurationSet {
    pub fn new() -> Self {
        ConfigurationSet {
            configurations: Vec::new(),
        }
    }

    pub fn append(&mut self, configuration: Configuration) {
        self.configurations.push(configuration);
    }

    pub fn get(&self, tag: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|c| c.tag == tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.configurations.iter().map(|c| c.tag.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.configurations.iter()
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}
