//! Core units, constants, and the standard-atmosphere slice shared across the
//! fleet studies workspace.
//!
//! Every numeric field in the vehicle and mission records is stored in SI
//! units. Builders convert as they assign, multiplying a bare number by a
//! unit constant (`53.0 * units::INCH`), so the conversion factor is visible
//! at the point of data entry.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Sea-level air density of the 1976 US Standard Atmosphere (kg/m³).
    pub const SEA_LEVEL_DENSITY: f64 = 1.225;
    /// Sea-level static temperature of the 1976 US Standard Atmosphere (K).
    pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;
    /// Sea-level static pressure of the 1976 US Standard Atmosphere (Pa).
    pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0;
    /// Specific gas constant of dry air (J/(kg·K)).
    pub const GAS_CONSTANT_AIR: f64 = 287.053;
    /// Ratio of specific heats of dry air.
    pub const GAMMA_AIR: f64 = 1.4;
}

/// Unit-conversion constants. Multiplying a value by a constant converts it
/// into the SI base unit; dividing converts back.
pub mod units {
    use std::f64::consts::PI;

    // Length (metres)
    pub const METER: f64 = 1.0;
    pub const KILOMETER: f64 = 1_000.0;
    pub const FOOT: f64 = 0.3048;
    pub const INCH: f64 = 0.0254;
    pub const NAUTICAL_MILE: f64 = 1_852.0;
    pub const MILE: f64 = 1_609.344;

    // Area (square metres)
    pub const SQUARE_METER: f64 = 1.0;
    pub const SQUARE_FOOT: f64 = FOOT * FOOT;
    pub const SQUARE_INCH: f64 = INCH * INCH;

    // Speed (metres per second)
    pub const METER_PER_SECOND: f64 = 1.0;
    pub const KNOT: f64 = NAUTICAL_MILE / 3_600.0;
    pub const MILE_PER_HOUR: f64 = MILE / 3_600.0;
    pub const FOOT_PER_MINUTE: f64 = FOOT / 60.0;

    // Angle (radians) and angular rate (radians per second)
    pub const RADIAN: f64 = 1.0;
    pub const DEGREE: f64 = PI / 180.0;
    pub const RPM: f64 = 2.0 * PI / 60.0;

    // Mass (kilograms)
    pub const KILOGRAM: f64 = 1.0;
    pub const POUND: f64 = 0.453_592_37;

    // Power (watts) and energy (joules)
    pub const WATT: f64 = 1.0;
    pub const KILOWATT: f64 = 1_000.0;
    pub const HORSEPOWER: f64 = 745.699_872;
    pub const JOULE: f64 = 1.0;
    pub const WATT_HOUR: f64 = 3_600.0;
    /// Specific energy, J/kg per Wh/kg.
    pub const WATT_HOUR_PER_KILOGRAM: f64 = 3_600.0;

    // Pressure (pascals)
    pub const PASCAL: f64 = 1.0;
    pub const PSI: f64 = 6_894.757_293_168_361;

    // Current (amperes)
    pub const AMPERE: f64 = 1.0;

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * DEGREE
    }

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v / DEGREE
    }

    /// Convert revolutions per minute to radians per second.
    #[inline]
    pub fn rpm_to_rad_s(v: f64) -> f64 {
        v * RPM
    }

    /// Convert radians per second to revolutions per minute.
    #[inline]
    pub fn rad_s_to_rpm(v: f64) -> f64 {
        v / RPM
    }
}

/// Minimal 1976 US Standard Atmosphere slice: troposphere plus the lower
/// isothermal stratosphere, which covers every altitude the studies use.
pub mod atmosphere {
    use super::constants::{
        G0, GAMMA_AIR, GAS_CONSTANT_AIR, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE,
    };

    /// Tropopause altitude (m).
    const TROPOPAUSE_M: f64 = 11_000.0;
    /// Tropospheric lapse rate (K/m).
    const LAPSE_RATE: f64 = 0.0065;

    /// Freestream state at a geopotential altitude.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct AtmosphereSample {
        pub temperature_k: f64,
        pub pressure_pa: f64,
        pub density_kg_m3: f64,
        pub speed_of_sound_m_s: f64,
    }

    /// Evaluate the 1976 US Standard Atmosphere at `altitude_m`.
    ///
    /// Altitudes below sea level are clamped to zero; altitudes above the
    /// tropopause use the isothermal-layer relation.
    pub fn us_standard_1976(altitude_m: f64) -> AtmosphereSample {
        let altitude = altitude_m.max(0.0);
        let (temperature, pressure) = if altitude <= TROPOPAUSE_M {
            let t = SEA_LEVEL_TEMPERATURE - LAPSE_RATE * altitude;
            let p = SEA_LEVEL_PRESSURE
                * (t / SEA_LEVEL_TEMPERATURE).powf(G0 / (GAS_CONSTANT_AIR * LAPSE_RATE));
            (t, p)
        } else {
            let t_tropopause = SEA_LEVEL_TEMPERATURE - LAPSE_RATE * TROPOPAUSE_M;
            let p_tropopause = SEA_LEVEL_PRESSURE
                * (t_tropopause / SEA_LEVEL_TEMPERATURE)
                    .powf(G0 / (GAS_CONSTANT_AIR * LAPSE_RATE));
            let p = p_tropopause
                * (-G0 * (altitude - TROPOPAUSE_M) / (GAS_CONSTANT_AIR * t_tropopause)).exp();
            (t_tropopause, p)
        };
        let density = pressure / (GAS_CONSTANT_AIR * temperature);
        let speed_of_sound = (GAMMA_AIR * GAS_CONSTANT_AIR * temperature).sqrt();
        AtmosphereSample {
            temperature_k: temperature,
            pressure_pa: pressure,
            density_kg_m3: density,
            speed_of_sound_m_s: speed_of_sound,
        }
    }
}
