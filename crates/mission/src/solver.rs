//! Declarative settings for the external sequential-segment solver.

/// Unknown seeds and residual shape attached to every segment of a mission.
/// The solver iterates these; the mission only declares them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverHints {
    /// Default discretization points per segment.
    pub control_points: u32,
    /// Whether the battery state is initialized at segment start.
    pub initialize_battery: bool,
    /// Seed for the pitch-command unknown of shaft-power networks (rad).
    pub pitch_command_unknown_rad: Option<f64>,
    /// Seed for the propeller power-coefficient unknown.
    pub propeller_power_coefficient_unknown: Option<f64>,
    /// Seed for the battery voltage-under-load unknown (V).
    pub battery_voltage_unknown_v: Option<f64>,
    /// Number of network residual rows the solver drives to zero.
    pub residual_rows: u32,
}

impl SolverHints {
    /// Settings used by the internal-combustion propeller missions.
    pub fn internal_combustion() -> Self {
        SolverHints {
            control_points: 3,
            initialize_battery: false,
            pitch_command_unknown_rad: Some(0.0),
            propeller_power_coefficient_unknown: None,
            battery_voltage_unknown_v: None,
            residual_rows: 1,
        }
    }

    /// Settings used by the battery-propeller missions; the voltage unknown
    /// is seeded at the battery's maximum voltage.
    pub fn battery_propeller(max_voltage_v: f64) -> Self {
        SolverHints {
            control_points: 4,
            initialize_battery: true,
            pitch_command_unknown_rad: None,
            propeller_power_coefficient_unknown: Some(0.005),
            battery_voltage_unknown_v: Some(max_voltage_v),
            residual_rows: 2,
        }
    }
}
