//! Airfoil data files shared across the studies.
//!
//! The files live outside the crate under `data/airfoils/`; the records
//! reference them by path for the external propeller design routine, and
//! `fleet_config` can parse and validate them when present.

use std::path::PathBuf;

/// NACA 4412 blade-section coordinate file.
pub fn naca_4412_geometry() -> Vec<PathBuf> {
    vec![PathBuf::from("data/airfoils/NACA_4412.txt")]
}

/// NACA 4412 polar sweep, Re 50k through 1M.
pub fn naca_4412_polars() -> Vec<Vec<PathBuf>> {
    vec![
        [50_000u32, 100_000, 200_000, 500_000, 1_000_000]
            .iter()
            .map(|re| PathBuf::from(format!("data/airfoils/polars/NACA_4412_polar_Re_{re}.txt")))
            .collect(),
    ]
}

/// All twenty blade stations on the first (and only) polar set.
pub fn uniform_polar_stations() -> Vec<usize> {
    vec![0; 20]
}

/// Caravan wing-section coordinate file at a spanwise break.
pub fn caravan_section(name: &str) -> PathBuf {
    PathBuf::from(format!("data/airfoils/{name}.txt"))
}
