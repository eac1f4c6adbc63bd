//! Cessna 172 Skyhawk, battery-electric conversion around an HPDM-250 class
//! motor.

use std::f64::consts::PI;

use fleet_core::atmosphere::us_standard_1976;
use fleet_core::units::{
    DEGREE, FOOT, INCH, KILOGRAM, KNOT, METER, POUND, PSI, RPM, SQUARE_FOOT, SQUARE_INCH,
    WATT_HOUR_PER_KILOGRAM,
};
use fleet_propulsion::{
    Avionics, Battery, BatteryPropeller, ElectronicSpeedController, Motor, Payload, Propeller,
    PropulsionNetwork,
};
use fleet_vehicle::planform::wing_planform;
use fleet_vehicle::{
    Configuration, ConfigurationSet, ControlSurface, ControlSurfaceKind, Envelope, Fuselage,
    GearLeg, LandingGear, MassProperties, Systems, Vehicle, Wing,
};

use crate::BuildError;
use crate::airfoils;

/// Build the electric Skyhawk vehicle record.
pub fn vehicle() -> Vehicle {
    let mut vehicle = Vehicle::new("Cessna_172_SP");

    vehicle.mass_properties = MassProperties {
        max_takeoff_kg: 2_550.0 * POUND,
        takeoff_kg: 2_550.0 * POUND,
        max_zero_fuel_kg: Some(2_550.0 * POUND),
        cargo_kg: 0.0,
        ..MassProperties::default()
    };
    vehicle.envelope = Envelope {
        ultimate_load: 5.7,
        limit_load: Some(3.8),
    };

    // Design point from the cruise condition.
    let cruise_speed = 124.0 * KNOT;
    let altitude = 8_500.0 * FOOT;
    let freestream = us_standard_1976(0.0);
    let freestream0 = us_standard_1976(altitude);
    vehicle.design_mach_number = Some(cruise_speed / freestream.speed_of_sound_m_s);
    vehicle.design_dynamic_pressure_pa =
        Some(0.5 * freestream0.density_kg_m3 * cruise_speed * cruise_speed);

    vehicle.reference_area_m2 = 174.0 * SQUARE_FOOT;
    vehicle.passengers = 4;
    vehicle.systems = Systems {
        control: "fully powered".to_string(),
        accessories: "medium range".to_string(),
    };

    // Main wing
    let chord_root = 66.0 * INCH;
    let chord_tip = 45.0 * INCH;
    let span = 36.0 * FOOT + 1.0 * INCH;
    let area_reference = 174.0 * SQUARE_FOOT;
    let mut wing = Wing {
        tag: "main_wing".to_string(),
        sweep_quarter_chord_rad: 0.0 * DEGREE,
        thickness_to_chord: 0.12,
        area_reference_m2: area_reference,
        span_m: span,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: 58.0 * INCH,
        // Taper entered root-over-tip on this data sheet.
        taper: chord_root / chord_tip,
        aspect_ratio: span * span / area_reference,
        twist_root_rad: 3.0 * DEGREE,
        twist_tip_rad: 1.5 * DEGREE,
        origin_m: Some([80.0 * INCH, 0.0, 0.0]),
        aerodynamic_center_m: Some([22.0 * INCH, 0.0, 0.0]),
        vertical: false,
        symmetric: true,
        high_lift: true,
        dynamic_pressure_ratio: Some(1.0),
        ..Wing::default()
    };
    wing.append_control_surface(ControlSurface {
        span_fraction_start: 0.15,
        span_fraction_end: 0.324,
        deflection_rad: 1.0 * DEGREE,
        chord_fraction: Some(0.19),
        ..ControlSurface::new("flap", ControlSurfaceKind::Flap)
    });
    wing.append_control_surface(ControlSurface {
        span_fraction_start: 0.324,
        span_fraction_end: 0.963,
        deflection_rad: 1.0 * DEGREE,
        chord_fraction: Some(0.1),
        ..ControlSurface::new("slat", ControlSurfaceKind::Slat)
    });
    wing_planform(&mut wing);
    vehicle.append_wing(wing);

    // Horizontal stabilizer
    let chord_root = 55.0 * INCH;
    let chord_tip = 30.0 * INCH;
    let span = 136.0 * INCH;
    let area_reference = 5_800.0 * SQUARE_INCH;
    vehicle.append_wing(Wing {
        tag: "horizontal_stabilizer".to_string(),
        sweep_quarter_chord_rad: 0.0 * DEGREE,
        thickness_to_chord: 0.12,
        area_reference_m2: area_reference,
        span_m: span,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: 43.0 * INCH,
        taper: chord_root / chord_tip,
        aspect_ratio: span * span / area_reference,
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        origin_m: Some([246.0 * INCH, 0.0, 0.0]),
        aerodynamic_center_m: Some([20.0 * INCH, 0.0, 0.0]),
        vertical: false,
        symmetric: true,
        high_lift: false,
        dynamic_pressure_ratio: Some(0.9),
        ..Wing::default()
    });

    // Vertical stabilizer
    let chord_root = 66.0 * INCH;
    let chord_tip = 27.0 * INCH;
    let span = 73.0 * INCH;
    let area_reference = 3_500.0 * SQUARE_INCH;
    vehicle.append_wing(Wing {
        tag: "vertical_stabilizer".to_string(),
        sweep_quarter_chord_rad: 25.0 * DEGREE,
        thickness_to_chord: 0.12,
        area_reference_m2: area_reference,
        span_m: span,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: 48.0 * INCH,
        taper: chord_root / chord_tip,
        aspect_ratio: span * span / area_reference,
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        origin_m: Some([237.0 * INCH, 0.0, 0.0]),
        aerodynamic_center_m: Some([20.0 * INCH, 0.0, 0.0]),
        vertical: true,
        symmetric: false,
        t_tail: false,
        dynamic_pressure_ratio: Some(1.0),
        ..Wing::default()
    });

    // Fuselage
    let width = 42.0 * INCH;
    let height_maximum = 62.0 * INCH;
    let length_total = 326.0 * INCH;
    let length_empennage = 161.0 * INCH;
    vehicle.append_fuselage(Fuselage {
        tag: "fuselage".to_string(),
        number_coach_seats: Some(4),
        differential_pressure_pa: Some(8.0 * PSI),
        width_m: width,
        height_maximum_m: height_maximum,
        length_total_m: length_total,
        length_empennage_m: Some(length_empennage),
        length_cabin_m: Some(105.0 * INCH),
        length_structure_m: Some(length_total - length_empennage),
        // Tapered-shell approximations for the shell volume allocation.
        volume_m3: Some(0.4 * length_total * (PI / 4.0) * height_maximum * height_maximum),
        internal_volume_m3: Some(0.3 * length_total * (PI / 4.0) * height_maximum * height_maximum),
        area_wetted_m2: Some(30_000.0 * SQUARE_INCH),
        seats_abreast: Some(2),
        fineness_nose: Some(1.6),
        fineness_tail: Some(2.0),
        length_nose_m: Some(60.0 * INCH),
        height_at_quarter_length_m: Some(62.0 * INCH),
        height_at_three_quarters_length_m: Some(62.0 * INCH),
        height_at_wing_root_quarter_chord_m: Some(23.0 * INCH),
        area_front_projected_m2: Some(width * height_maximum),
        effective_diameter_m: Some(50.0 * INCH),
        ..Fuselage::default()
    });

    // Landing gear, strut lengths estimated from photographs.
    vehicle.landing_gear = Some(LandingGear {
        tag: String::new(),
        main: GearLeg {
            strut_length_m: Some(12.0 * INCH),
            ..GearLeg::default()
        },
        nose: GearLeg {
            strut_length_m: Some(6.0 * INCH),
            ..GearLeg::default()
        },
    });

    // Propulsor (HPDM-250)
    let mut propeller = Propeller {
        number_of_blades: 2,
        freestream_velocity_m_s: 119.0 * KNOT,
        angular_velocity_rad_s: 2_650.0 * RPM,
        tip_radius_m: 76.0 / 2.0 * INCH,
        hub_radius_m: 8.0 * INCH,
        design_lift_coefficient: 0.8,
        design_altitude_m: 12_000.0 * FOOT,
        design_power_w: Some(200_000.0),
        airfoil_geometry: airfoils::naca_4412_geometry(),
        airfoil_polars: airfoils::naca_4412_polars(),
        airfoil_polar_stations: airfoils::uniform_polar_stations(),
        ..Propeller::default()
    };
    let design_density = us_standard_1976(propeller.design_altitude_m).density_kg_m3;
    propeller.design_power_coefficient = propeller.ideal_power_coefficient(design_density);

    let motor = Motor {
        resistance_ohm: 0.008,
        no_load_current_a: 4.5,
        speed_constant_rad_s_per_v: 20_000.0 * RPM,
        propeller_radius_m: propeller.tip_radius_m,
        propeller_power_coefficient: propeller.design_power_coefficient,
        gear_ratio: 4.0,
        gearbox_efficiency: 0.938,
        expected_current_a: Some(250.0),
        mass_kg: 18.0 * KILOGRAM,
        ..Motor::default()
    };

    let mut battery = Battery {
        mass_kg: 500.0 * KILOGRAM,
        specific_energy_j_per_kg: 350.0 * WATT_HOUR_PER_KILOGRAM,
        resistance_ohm: 0.006,
        max_voltage_v: 500.0,
        ..Battery::lithium_ion()
    };
    battery.initialize_from_mass();

    let voltage = battery.max_voltage_v;
    vehicle.append_network(PropulsionNetwork::BatteryPropeller(BatteryPropeller {
        number_of_engines: 1,
        nacelle_diameter_m: 0.207 * METER,
        engine_length_m: 0.235 * METER,
        wetted_area_m2: 0.207 * (2.0 * PI * 0.207 / 2.0),
        esc: ElectronicSpeedController { efficiency: 0.99 },
        propeller,
        battery,
        motor,
        payload: Payload {
            power_draw_w: 50.0,
            mass_kg: 5.0 * KILOGRAM,
        },
        avionics: Avionics {
            power_draw_w: 50.0,
            mass_uninstalled_kg: None,
        },
        voltage_v: voltage,
    }));

    vehicle
}

/// Flight-phase configurations of the electric Skyhawk.
pub fn configurations(base: &Vehicle) -> Result<ConfigurationSet, BuildError> {
    let mut configs = ConfigurationSet::new();
    configs.append(Configuration::derived(base, "base"));
    configs.append(Configuration::derived(base, "cruise"));

    let mut config = Configuration::derived(base, "takeoff");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.v2_vs_ratio = Some(1.21);
    config.maximum_lift_coefficient = Some(2.0);
    configs.append(config);

    let mut config = Configuration::derived(base, "landing");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.vref_vs_ratio = Some(1.23);
    config.maximum_lift_coefficient = Some(2.0);
    configs.append(config);

    Ok(configs)
}
