//! Constant-mass lithium-ion battery record.

use fleet_core::units;

/// Battery pack sized by total cell mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Battery {
    pub mass_kg: f64,
    pub specific_energy_j_per_kg: f64,
    pub specific_power_w_per_kg: f64,
    pub resistance_ohm: f64,
    pub max_voltage_v: f64,
    /// Total stored energy, set by [`Battery::initialize_from_mass`].
    pub max_energy_j: f64,
    /// Peak deliverable power, set by [`Battery::initialize_from_mass`].
    pub max_power_w: f64,
}

impl Battery {
    /// Lithium-ion defaults. Studies override mass, specific energy,
    /// resistance, and bus voltage before sizing.
    pub fn lithium_ion() -> Self {
        Battery {
            mass_kg: 0.0,
            specific_energy_j_per_kg: 200.0 * units::WATT_HOUR_PER_KILOGRAM,
            specific_power_w_per_kg: 1.0 * units::KILOWATT,
            resistance_ohm: 0.022,
            max_voltage_v: 0.0,
            max_energy_j: 0.0,
            max_power_w: 0.0,
        }
    }

    /// Derive energy and power capacity from the pack mass.
    pub fn initialize_from_mass(&mut self) {
        self.max_energy_j = self.mass_kg * self.specific_energy_j_per_kg;
        self.max_power_w = self.mass_kg * self.specific_power_w_per_kg;
    }
}
