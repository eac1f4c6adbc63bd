//! Electrical peripherals: speed controller, avionics, payload.

/// Electronic speed controller between bus and motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElectronicSpeedController {
    pub efficiency: f64,
}

/// Avionics power and weight allocation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Avionics {
    pub power_draw_w: f64,
    /// Uninstalled avionics weight, where the weights method wants one (kg).
    pub mass_uninstalled_kg: Option<f64>,
}

/// Generic powered payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payload {
    pub power_draw_w: f64,
    pub mass_kg: f64,
}
