//! Fixed landing gear record, used by the weights and noise methods.

/// Landing gear assembly: main legs plus nose leg.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandingGear {
    pub tag: String,
    pub main: GearLeg,
    pub nose: GearLeg,
}

/// One gear position.
#[derive(Debug, Clone, PartialEq)]
pub struct GearLeg {
    pub tag: Option<String>,
    pub tire_diameter_m: Option<f64>,
    pub tire_width_m: Option<f64>,
    pub strut_length_m: Option<f64>,
    /// Number of struts at this position.
    pub units: u32,
    /// Wheels per strut.
    pub wheels: u32,
    pub drag_coefficient: Option<f64>,
}

impl Default for GearLeg {
    fn default() -> Self {
        GearLeg {
            tag: None,
            tire_diameter_m: None,
            tire_width_m: None,
            strut_length_m: None,
            units: 1,
            wheels: 1,
            drag_coefficient: None,
        }
    }
}
