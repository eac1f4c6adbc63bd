//! Solar network components: panel, radiation process, and MPPT logic.

/// Photovoltaic panel laid over the wing planform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPanel {
    pub area_m2: f64,
    pub efficiency: f64,
    pub mass_kg: f64,
}

/// Marker for the solar-flux process evaluated by the external energy
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarRadiation;

/// System logic controller with maximum-power-point tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarLogic {
    pub system_voltage_v: f64,
    pub mppt_efficiency: f64,
}
