//! The vehicle aggregate handed to the external analysis framework.

use fleet_propulsion::network::{BatteryPropeller, PropulsionNetwork};
use fleet_propulsion::peripherals::Avionics;

use crate::fuel::Fuel;
use crate::fuselage::Fuselage;
use crate::landing_gear::LandingGear;
use crate::mass::{Envelope, MassProperties};
use crate::wing::Wing;

/// Control and accessories classification used by the weights methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Systems {
    pub control: String,
    pub accessories: String,
}

/// One aircraft: geometry, mass properties, and propulsion.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub tag: String,
    pub mass_properties: MassProperties,
    pub envelope: Envelope,
    pub reference_area_m2: f64,
    pub passengers: u32,
    pub systems: Systems,
    pub design_mach_number: Option<f64>,
    pub design_range_m: Option<f64>,
    pub design_cruise_altitude_m: Option<f64>,
    pub design_dynamic_pressure_pa: Option<f64>,
    pub max_lift_coefficient_factor: Option<f64>,
    pub wings: Vec<Wing>,
    pub fuselages: Vec<Fuselage>,
    pub landing_gear: Option<LandingGear>,
    pub fuel: Option<Fuel>,
    pub networks: Vec<PropulsionNetwork>,
    /// Vehicle-level avionics allocation of the conventional studies.
    pub avionics: Option<Avionics>,
}

impl Vehicle {
    /// Empty vehicle with the given tag; the builders fill everything else.
    pub fn new(tag: &str) -> Self {
        Vehicle {
            tag: tag.to_string(),
            mass_properties: MassProperties::default(),
            envelope: Envelope::default(),
            reference_area_m2: 0.0,
            passengers: 0,
            systems: Systems::default(),
            design_mach_number: None,
            design_range_m: None,
            design_cruise_altitude_m: None,
            design_dynamic_pressure_pa: None,
            max_lift_coefficient_factor: None,
            wings: Vec::new(),
            fuselages: Vec::new(),
            landing_gear: None,
            fuel: None,
            networks: Vec::new(),
            avionics: None,
        }
    }

    pub fn append_wing(&mut self, wing: Wing) {
        self.wings.push(wing);
    }

    pub fn append_fuselage(&mut self, fuselage: Fuselage) {
        self.fuselages.push(fuselage);
    }

    pub fn append_network(&mut self, network: PropulsionNetwork) {
        self.networks.push(network);
    }

    /// Look up a wing by tag.
    pub fn wing(&self, tag: &str) -> Option<&Wing> {
        self.wings.iter().find(|w| w.tag == tag)
    }

    /// Mutable wing lookup, used by the configuration layer.
    pub fn wing_mut(&mut self, tag: &str) -> Option<&mut Wing> {
        self.wings.iter_mut().find(|w| w.tag == tag)
    }

    pub fn main_wing(&self) -> Option<&Wing> {
        self.wing("main_wing")
    }

    pub fn fuselage(&self, tag: &str) -> Option<&Fuselage> {
        self.fuselages.iter().find(|f| f.tag == tag)
    }

    /// Look up a propulsion network by tag.
    pub fn network(&self, tag: &str) -> Option<&PropulsionNetwork> {
        self.networks.iter().find(|n| n.tag() == tag)
    }

    /// The battery-propeller network, if one is installed.
    pub fn battery_propeller(&self) -> Option<&BatteryPropeller> {
        self.networks.iter().find_map(|n| match n {
            PropulsionNetwork::BatteryPropeller(net) => Some(net),
            _ => None,
        })
    }
}
