//! Electric motor record and the speed-constant selection sweep.

use fleet_core::units;

/// Brushless DC motor driving one propeller.
#[derive(Debug, Clone, PartialEq)]
pub struct Motor {
    pub mass_kg: f64,
    pub resistance_ohm: f64,
    pub no_load_current_a: f64,
    /// Speed constant in rad/s per volt.
    pub speed_constant_rad_s_per_v: f64,
    pub gear_ratio: f64,
    pub gearbox_efficiency: f64,
    pub expected_current_a: Option<f64>,
    /// Radius of the driven propeller (m).
    pub propeller_radius_m: f64,
    /// Power coefficient of the driven propeller at its design point.
    pub propeller_power_coefficient: Option<f64>,
    /// Motor placement, one entry per installed unit (m).
    pub origin_m: Vec<[f64; 3]>,
}

impl Default for Motor {
    fn default() -> Self {
        Motor {
            mass_kg: 0.0,
            resistance_ohm: 0.0,
            no_load_current_a: 0.0,
            speed_constant_rad_s_per_v: 0.0,
            gear_ratio: 1.0,
            gearbox_efficiency: 1.0,
            expected_current_a: None,
            propeller_radius_m: 0.0,
            propeller_power_coefficient: None,
            origin_m: Vec::new(),
        }
    }
}

/// Uniform, inclusive candidate range for the speed-constant sweep,
/// expressed in rpm per volt as entered in the studies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedConstantGrid {
    pub start_rpm_per_v: f64,
    pub end_rpm_per_v: f64,
    pub step_rpm_per_v: f64,
}

impl Default for SpeedConstantGrid {
    /// 1 to 25 rpm/V in 0.05 rpm/V steps, 481 candidates.
    fn default() -> Self {
        SpeedConstantGrid {
            start_rpm_per_v: 1.0,
            end_rpm_per_v: 25.0,
            step_rpm_per_v: 0.05,
        }
    }
}

impl SpeedConstantGrid {
    /// Number of candidates in the inclusive range, or zero when the range
    /// is degenerate.
    pub fn len(&self) -> usize {
        if self.step_rpm_per_v <= 0.0 || self.end_rpm_per_v < self.start_rpm_per_v {
            return 0;
        }
        (((self.end_rpm_per_v - self.start_rpm_per_v) / self.step_rpm_per_v).round() as usize) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ascending candidates in rpm per volt.
    pub fn candidates(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start_rpm_per_v + i as f64 * self.step_rpm_per_v)
    }
}

/// Selected operating point of the speed-constant sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedConstantFit {
    /// Selected speed constant (rad/s per volt).
    pub speed_constant_rad_s_per_v: f64,
    /// Feasibility residual at the selected candidate: the implied winding
    /// resistance (ohm).
    pub winding_resistance_ohm: f64,
}

/// One evaluated candidate of the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedConstantSample {
    pub speed_constant_rpm_per_v: f64,
    pub speed_constant_rad_s_per_v: f64,
    pub residual_ohm: f64,
    pub feasible: bool,
}

/// Feasibility residual of a speed-constant candidate: the winding
/// resistance implied by the bus voltage, shaft speed, target efficiency,
/// and no-load current. Negative values mean the candidate cannot reach the
/// operating point.
fn residual_ohm(
    bus_voltage_v: f64,
    angular_velocity_rad_s: f64,
    motor_efficiency: f64,
    no_load_current_a: f64,
    speed_constant_rad_s_per_v: f64,
) -> f64 {
    let v = bus_voltage_v;
    let omega = angular_velocity_rad_s;
    let kv = speed_constant_rad_s_per_v;
    ((v - omega / kv) * (1.0 - motor_efficiency * v * kv / omega)) / no_load_current_a
}

/// Evaluate every candidate in the grid, in ascending order.
pub fn sweep_speed_constant(
    bus_voltage_v: f64,
    angular_velocity_rad_s: f64,
    motor_efficiency: f64,
    no_load_current_a: f64,
    grid: SpeedConstantGrid,
) -> Vec<SpeedConstantSample> {
    grid.candidates()
        .map(|kv_rpm| {
            let kv = kv_rpm * units::RPM;
            let residual = residual_ohm(
                bus_voltage_v,
                angular_velocity_rad_s,
                motor_efficiency,
                no_load_current_a,
                kv,
            );
            SpeedConstantSample {
                speed_constant_rpm_per_v: kv_rpm,
                speed_constant_rad_s_per_v: kv,
                residual_ohm: residual,
                feasible: residual > 0.0,
            }
        })
        .collect()
}

/// Select the smallest candidate in the grid whose feasibility residual is
/// strictly positive. Returns `None` when no candidate is feasible.
pub fn fit_speed_constant(
    bus_voltage_v: f64,
    angular_velocity_rad_s: f64,
    motor_efficiency: f64,
    no_load_current_a: f64,
    grid: SpeedConstantGrid,
) -> Option<SpeedConstantFit> {
    grid.candidates().find_map(|kv_rpm| {
        let kv = kv_rpm * units::RPM;
        let residual = residual_ohm(
            bus_voltage_v,
            angular_velocity_rad_s,
            motor_efficiency,
            no_load_current_a,
            kv,
        );
        (residual > 0.0).then_some(SpeedConstantFit {
            speed_constant_rad_s_per_v: kv,
            winding_resistance_ohm: residual,
        })
    })
}
