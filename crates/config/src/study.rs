//! Study override manifests.
//!
//! A study file adjusts the cruise boundary conditions of a recorded
//! mission without editing the builders. TOML files are detected by
//! extension; anything else parses as YAML.

use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Optional overrides for the cruise legs of a mission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyOverrides {
    #[serde(default)]
    pub cruise_altitude_m: Option<f64>,
    #[serde(default)]
    pub cruise_air_speed_m_s: Option<f64>,
    #[serde(default)]
    pub cruise_distance_m: Option<f64>,
    /// Battery energy at cruise start as a fraction of pack capacity.
    #[serde(default)]
    pub battery_energy_fraction: Option<f64>,
    #[serde(default)]
    pub control_points: Option<u32>,
}

/// Load a study override file.
pub fn load_study<P: AsRef<Path>>(path: P) -> Result<StudyOverrides, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(serde_yaml::from_str(&contents)?)
    }
}
