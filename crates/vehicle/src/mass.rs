//! Vehicle-level mass properties and the flight envelope.

/// Weight statement of the vehicle. The maximum takeoff weight feeds the
/// weights methods; the takeoff weight seeds the start of the mission and
/// is the one that may drop below operating empty when the energy budget
/// runs long.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MassProperties {
    pub max_takeoff_kg: f64,
    pub takeoff_kg: f64,
    pub operating_empty_kg: Option<f64>,
    pub max_zero_fuel_kg: Option<f64>,
    pub cargo_kg: f64,
    pub max_payload_kg: Option<f64>,
    pub max_fuel_kg: Option<f64>,
    pub ramp_kg: Option<f64>,
    pub max_landing_kg: Option<f64>,
    pub center_of_gravity_m: Option<[f64; 3]>,
    pub moments_of_inertia_kg_m2: Option<[[f64; 3]; 3]>,
}

/// Structural design load factors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Envelope {
    pub ultimate_load: f64,
    pub limit_load: Option<f64>,
}
