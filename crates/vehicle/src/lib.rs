//! Airframe records and the vehicle aggregate.
//!
//! A vehicle is a nested bag of named numeric fields with SI units, set once
//! by a builder and then handed to the external analysis framework. Tag
//! lookup (`vehicle.wing("main_wing")`) is the only referential mechanism.

pub mod configuration;
pub mod fuel;
pub mod fuselage;
pub mod landing_gear;
pub mod mass;
pub mod planform;
pub mod vehicle;
pub mod wing;

pub use configuration::{Configuration, ConfigurationError, ConfigurationSet};
pub use fuel::{Fuel, Propellant};
pub use fuselage::{Fuselage, Strut};
pub use landing_gear::{GearLeg, LandingGear};
pub use mass::{Envelope, MassProperties};
pub use vehicle::{Systems, Vehicle};
pub use wing::{ControlSurface, ControlSurfaceKind, FlapConfiguration, Wing, WingSegment};
