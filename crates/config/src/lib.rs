//! File-backed inputs: airfoil coordinate and polar tables, and study
//! override manifests.

pub mod airfoil;
pub mod study;

use std::path::PathBuf;

use thiserror::Error;

pub use airfoil::{AirfoilCoordinates, AirfoilPolar, PolarPoint};
pub use study::StudyOverrides;

/// Errors that can occur while loading data and configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{path}:{line}: {message}")]
    Airfoil {
        path: PathBuf,
        line: usize,
        message: String,
    },
}
