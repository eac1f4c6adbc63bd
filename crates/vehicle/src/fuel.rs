//! Fuel system record for the conventional studies.

/// Stored propellant type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propellant {
    AviationGasoline,
}

impl Propellant {
    /// Liquid density (kg/m³).
    pub fn density_kg_m3(&self) -> f64 {
        match self {
            Propellant::AviationGasoline => 721.0,
        }
    }

    /// Lower heating value (J/kg).
    pub fn specific_energy_j_per_kg(&self) -> f64 {
        match self {
            Propellant::AviationGasoline => 43.71e6,
        }
    }
}

/// Fuel load and tankage.
#[derive(Debug, Clone, PartialEq)]
pub struct Fuel {
    pub propellant: Propellant,
    pub mass_kg: f64,
    pub number_of_tanks: u32,
    pub origin_m: Option<[f64; 3]>,
    /// All of the fuel volume is internal.
    pub internal_volume_m3: f64,
}

impl Fuel {
    /// Fuel load of the given propellant; the internal volume follows from
    /// the liquid density.
    pub fn new(propellant: Propellant, mass_kg: f64, number_of_tanks: u32) -> Self {
        Fuel {
            propellant,
            mass_kg,
            number_of_tanks,
            origin_m: None,
            internal_volume_m3: mass_kg / propellant.density_kg_m3(),
        }
    }
}
