//! Propulsion network variants.

use crate::battery::Battery;
use crate::engine::InternalCombustionEngine;
use crate::motor::Motor;
use crate::peripherals::{Avionics, ElectronicSpeedController, Payload};
use crate::propeller::Propeller;
use crate::solar::{SolarLogic, SolarPanel, SolarRadiation};

/// Piston engine driving a propeller through a fixed shaft.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalCombustionPropeller {
    pub number_of_engines: u32,
    pub nacelle_diameter_m: f64,
    pub engine_length_m: f64,
    pub wetted_area_m2: f64,
    pub engine: InternalCombustionEngine,
    pub propeller: Propeller,
}

/// Battery bus feeding motor-driven propellers through a speed controller.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryPropeller {
    pub number_of_engines: u32,
    pub nacelle_diameter_m: f64,
    pub engine_length_m: f64,
    pub wetted_area_m2: f64,
    pub esc: ElectronicSpeedController,
    pub propeller: Propeller,
    pub battery: Battery,
    pub motor: Motor,
    pub payload: Payload,
    pub avionics: Avionics,
    /// Bus voltage, taken from the battery's maximum voltage (V).
    pub voltage_v: f64,
}

/// Solar-electric network: panel and MPPT logic ahead of the battery bus.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarNetwork {
    pub number_of_engines: u32,
    pub nacelle_diameter_m: f64,
    pub engine_length_m: f64,
    pub wetted_area_m2: f64,
    pub esc: ElectronicSpeedController,
    pub solar_flux: SolarRadiation,
    pub solar_panel: SolarPanel,
    pub propeller: Propeller,
    pub motor: Motor,
    pub payload: Payload,
    pub avionics: Avionics,
    pub battery: Battery,
    pub solar_logic: SolarLogic,
    pub voltage_v: f64,
}

/// The propulsion network installed on a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub enum PropulsionNetwork {
    InternalCombustion(InternalCombustionPropeller),
    BatteryPropeller(BatteryPropeller),
    Solar(SolarNetwork),
}

impl PropulsionNetwork {
    /// Network tag, used for component lookup by the mission analyses.
    pub fn tag(&self) -> &'static str {
        match self {
            PropulsionNetwork::InternalCombustion(_) => "internal_combustion",
            PropulsionNetwork::BatteryPropeller(_) => "battery_propeller",
            PropulsionNetwork::Solar(_) => "solar",
        }
    }

    pub fn number_of_engines(&self) -> u32 {
        match self {
            PropulsionNetwork::InternalCombustion(net) => net.number_of_engines,
            PropulsionNetwork::BatteryPropeller(net) => net.number_of_engines,
            PropulsionNetwork::Solar(net) => net.number_of_engines,
        }
    }

    pub fn propeller(&self) -> &Propeller {
        match self {
            PropulsionNetwork::InternalCombustion(net) => &net.propeller,
            PropulsionNetwork::BatteryPropeller(net) => &net.propeller,
            PropulsionNetwork::Solar(net) => &net.propeller,
        }
    }

    /// Battery pack, if the network carries one.
    pub fn battery(&self) -> Option<&Battery> {
        match self {
            PropulsionNetwork::InternalCombustion(_) => None,
            PropulsionNetwork::BatteryPropeller(net) => Some(&net.battery),
            PropulsionNetwork::Solar(net) => Some(&net.battery),
        }
    }

    /// Drive motor, if the network is electric.
    pub fn motor(&self) -> Option<&Motor> {
        match self {
            PropulsionNetwork::InternalCombustion(_) => None,
            PropulsionNetwork::BatteryPropeller(net) => Some(&net.motor),
            PropulsionNetwork::Solar(net) => Some(&net.motor),
        }
    }
}
