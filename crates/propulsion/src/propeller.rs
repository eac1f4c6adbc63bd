//! Propeller design-point record.
//!
//! The blade design itself (chord and twist distributions from the airfoil
//! polars) is performed by the external propeller design routine; this
//! record carries its inputs and, once designed, its resulting power
//! coefficient.

use std::f64::consts::TAU;
use std::path::PathBuf;

/// Design point and airfoil references for one propeller.
#[derive(Debug, Clone, PartialEq)]
pub struct Propeller {
    pub number_of_blades: u32,
    pub freestream_velocity_m_s: f64,
    pub angular_velocity_rad_s: f64,
    pub tip_radius_m: f64,
    pub hub_radius_m: f64,
    pub design_lift_coefficient: f64,
    pub design_altitude_m: f64,
    pub design_thrust_n: Option<f64>,
    pub design_power_w: Option<f64>,
    pub activity_factor: Option<f64>,
    /// Hub placement, one entry per installed unit (m).
    pub origin_m: Vec<[f64; 3]>,
    /// Rotation sense per installed unit, +1 or -1.
    pub rotation: Vec<i8>,
    pub symmetry: bool,
    /// Blade-section coordinate files, consumed by the external design
    /// routine.
    pub airfoil_geometry: Vec<PathBuf>,
    /// Polar files per blade section, one Reynolds sweep each.
    pub airfoil_polars: Vec<Vec<PathBuf>>,
    /// Blade-station to polar-set assignment.
    pub airfoil_polar_stations: Vec<usize>,
    /// Power coefficient at the design point, filled by the external design
    /// routine or estimated with [`Propeller::ideal_power_coefficient`].
    pub design_power_coefficient: Option<f64>,
}

impl Default for Propeller {
    fn default() -> Self {
        Propeller {
            number_of_blades: 2,
            freestream_velocity_m_s: 0.0,
            angular_velocity_rad_s: 0.0,
            tip_radius_m: 0.0,
            hub_radius_m: 0.0,
            design_lift_coefficient: 0.0,
            design_altitude_m: 0.0,
            design_thrust_n: None,
            design_power_w: None,
            activity_factor: None,
            origin_m: Vec::new(),
            rotation: Vec::new(),
            symmetry: false,
            airfoil_geometry: Vec::new(),
            airfoil_polars: Vec::new(),
            airfoil_polar_stations: Vec::new(),
            design_power_coefficient: None,
        }
    }
}

impl Propeller {
    /// Propeller diameter (m).
    pub fn diameter_m(&self) -> f64 {
        2.0 * self.tip_radius_m
    }

    /// Rotational speed in revolutions per second.
    pub fn revolutions_per_second(&self) -> f64 {
        self.angular_velocity_rad_s / TAU
    }

    /// Ideal power coefficient `P / (ρ n³ D⁵)` at the design point, using
    /// the freestream density at the design altitude. `None` when no design
    /// power is set.
    pub fn ideal_power_coefficient(&self, density_kg_m3: f64) -> Option<f64> {
        let power = self.design_power_w?;
        let n = self.revolutions_per_second();
        let d = self.diameter_m();
        if n <= 0.0 || d <= 0.0 {
            return None;
        }
        Some(power / (density_kg_m3 * n.powi(3) * d.powi(5)))
    }

    /// Every airfoil file the record references, geometry then polars.
    pub fn airfoil_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.airfoil_geometry
            .iter()
            .chain(self.airfoil_polars.iter().flatten())
    }
}
