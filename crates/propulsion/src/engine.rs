//! Internal-combustion engine record.

/// Normally-aspirated piston engine at its rated condition.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalCombustionEngine {
    pub sea_level_power_w: f64,
    /// Altitude up to which the rated power is held flat (m).
    pub flat_rate_altitude_m: f64,
    pub rated_speed_rad_s: f64,
    /// Power-specific fuel consumption (lb/hp/hr, as tabulated).
    pub power_specific_fuel_consumption: f64,
}
