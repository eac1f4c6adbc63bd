//! Propulsion network records: engines, motors, batteries, propellers, and
//! the network variants that tie them together.
//!
//! These are declarative design records consumed by the external energy and
//! mission analyses; the only computation here is closed-form sizing
//! (battery energy from mass, motor speed-constant selection, ideal power
//! coefficient).

pub mod battery;
pub mod engine;
pub mod motor;
pub mod network;
pub mod peripherals;
pub mod propeller;
pub mod solar;

pub use battery::Battery;
pub use engine::InternalCombustionEngine;
pub use motor::{Motor, SpeedConstantFit, SpeedConstantGrid, SpeedConstantSample};
pub use network::{BatteryPropeller, InternalCombustionPropeller, PropulsionNetwork, SolarNetwork};
pub use peripherals::{Avionics, ElectronicSpeedController, Payload};
pub use propeller::Propeller;
pub use solar::{SolarLogic, SolarPanel, SolarRadiation};
