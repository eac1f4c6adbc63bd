//! Embraer E190, battery-electric concept with two podded motors.

use std::f64::consts::PI;

use fleet_core::units::{
    DEGREE, FOOT, INCH, KILOGRAM, METER, MILE_PER_HOUR, PASCAL, RPM, WATT_HOUR_PER_KILOGRAM,
};
use fleet_propulsion::motor::{self, SpeedConstantGrid};
use fleet_propulsion::{
    Avionics, Battery, BatteryPropeller, ElectronicSpeedController, Motor, Payload, Propeller,
    PropulsionNetwork,
};
use fleet_vehicle::planform::wing_planform;
use fleet_vehicle::{
    Configuration, ConfigurationSet, ControlSurface, ControlSurfaceKind, Envelope,
    FlapConfiguration, Fuselage, MassProperties, Systems, Vehicle, Wing, WingSegment,
};

use crate::BuildError;
use crate::airfoils;

/// Build the electric E190 vehicle record.
pub fn vehicle() -> Result<Vehicle, BuildError> {
    let mut vehicle = Vehicle::new("Embraer_E190AR");

    vehicle.mass_properties = MassProperties {
        max_takeoff_kg: 51_800.0,
        operating_empty_kg: Some(27_837.0),
        takeoff_kg: 51_800.0,
        max_zero_fuel_kg: Some(40_900.0),
        max_payload_kg: Some(13_063.0),
        max_fuel_kg: Some(12_971.0),
        cargo_kg: 0.0,
        center_of_gravity_m: Some([16.8, 0.0, 1.6]),
        moments_of_inertia_kg_m2: Some([
            [1.0e5, 0.0, 0.0],
            [0.0, 1.0e6, 0.0],
            [0.0, 0.0, 1.0e7],
        ]),
        ..MassProperties::default()
    };
    vehicle.envelope = Envelope {
        ultimate_load: 3.5,
        limit_load: Some(1.5),
    };
    vehicle.reference_area_m2 = 92.0;
    vehicle.passengers = 106;
    vehicle.systems = Systems {
        control: "fully powered".to_string(),
        accessories: "medium range".to_string(),
    };

    // Main wing
    let mut wing = Wing {
        tag: "main_wing".to_string(),
        area_reference_m2: 92.0,
        aspect_ratio: 8.4,
        chord_root_m: 6.2,
        chord_tip_m: 1.44,
        sweep_quarter_chord_rad: 23.0 * DEGREE,
        thickness_to_chord: 0.11,
        taper: 0.28,
        dihedral_rad: Some(5.00 * DEGREE),
        span_m: 28.72,
        origin_m: Some([13.0, 0.0, -1.50]),
        vertical: false,
        symmetric: true,
        high_lift: true,
        twist_root_rad: 2.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        dynamic_pressure_ratio: Some(1.0),
        ..Wing::default()
    };

    // Spanwise breaks, twist washing out linearly to the tip.
    wing.append_segment(WingSegment {
        tag: "root".to_string(),
        percent_span_location: 0.0,
        twist_rad: 4.0 * DEGREE,
        root_chord_percent: 1.0,
        thickness_to_chord: 0.11,
        dihedral_outboard_rad: 5.0 * DEGREE,
        sweep_quarter_chord_rad: Some(20.6 * DEGREE),
        ..WingSegment::default()
    });
    let station = 0.348;
    wing.append_segment(WingSegment {
        tag: "yehudi".to_string(),
        percent_span_location: station,
        twist_rad: (4.0 - station * 4.0) * DEGREE,
        root_chord_percent: 0.60,
        thickness_to_chord: 0.11,
        dihedral_outboard_rad: 4.0 * DEGREE,
        sweep_quarter_chord_rad: Some(24.1 * DEGREE),
        ..WingSegment::default()
    });
    let station = 0.961;
    wing.append_segment(WingSegment {
        tag: "section_2".to_string(),
        percent_span_location: station,
        twist_rad: (4.0 - station * 4.0) * DEGREE,
        root_chord_percent: 0.25,
        thickness_to_chord: 0.11,
        dihedral_outboard_rad: 70.0 * DEGREE,
        sweep_quarter_chord_rad: Some(50.0 * DEGREE),
        ..WingSegment::default()
    });
    let station = 1.0;
    wing.append_segment(WingSegment {
        tag: "Tip".to_string(),
        percent_span_location: station,
        twist_rad: (4.0 - station * 4.0) * DEGREE,
        root_chord_percent: 0.070,
        thickness_to_chord: 0.11,
        dihedral_outboard_rad: 0.0,
        sweep_quarter_chord_rad: Some(0.0),
        ..WingSegment::default()
    });

    wing.append_control_surface(ControlSurface {
        span_fraction_start: 0.11,
        span_fraction_end: 0.85,
        deflection_rad: 0.0 * DEGREE,
        chord_fraction: Some(0.28),
        configuration_type: Some(FlapConfiguration::DoubleSlotted),
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
    wing.area_exposed_m2 = wing.area_wetted_m2.map(|wetted| 0.80 * wetted);
    wing.twist_root_rad = 2.0 * DEGREE;
    wing.twist_tip_rad = 0.0 * DEGREE;
    vehicle.append_wing(wing);

    // Horizontal stabilizer
    let mut wing = Wing {
        tag: "horizontal_stabilizer".to_string(),
        area_reference_m2: 26.0,
        aspect_ratio: 5.5,
        sweep_quarter_chord_rad: 34.5 * DEGREE,
        thickness_to_chord: 0.11,
        taper: 0.11,
        dihedral_rad: Some(8.4 * DEGREE),
        origin_m: Some([31.0, 0.0, 0.44]),
        vertical: false,
        symmetric: true,
        high_lift: false,
        ..Wing::default()
    };
    wing_planform(&mut wing);
    wing.area_exposed_m2 = wing.area_wetted_m2.map(|wetted| 0.9 * wetted);
    wing.twist_root_rad = 2.0 * DEGREE;
    wing.twist_tip_rad = 2.0 * DEGREE;
    wing.dynamic_pressure_ratio = Some(0.90);
    vehicle.append_wing(wing);

    // Vertical stabilizer
    let mut wing = Wing {
        tag: "vertical_stabilizer".to_string(),
        area_reference_m2: 16.0,
        aspect_ratio: 1.7,
        sweep_quarter_chord_rad: 35.0 * DEGREE,
        thickness_to_chord: 0.11,
        taper: 0.31,
        dihedral_rad: Some(0.0),
        origin_m: Some([30.4, 0.0, 1.675]),
        vertical: true,
        symmetric: false,
        high_lift: false,
        ..Wing::default()
    };
    wing_planform(&mut wing);
    wing.area_exposed_m2 = wing.area_wetted_m2.map(|wetted| 0.9 * wetted);
    wing.twist_root_rad = 0.0 * DEGREE;
    wing.twist_tip_rad = 0.0 * DEGREE;
    wing.dynamic_pressure_ratio = Some(1.00);
    vehicle.append_wing(wing);

    // Fuselage
    vehicle.append_fuselage(Fuselage {
        tag: "fuselage".to_string(),
        number_coach_seats: Some(vehicle.passengers),
        seats_abreast: Some(4),
        seat_pitch_m: Some(30.0 * INCH),
        fineness_nose: Some(1.28),
        fineness_tail: Some(3.48),
        length_nose_m: Some(6.0),
        length_tail_m: Some(9.0),
        length_cabin_m: Some(21.24),
        length_total_m: 36.24,
        length_fore_space_m: Some(0.0),
        length_aft_space_m: Some(0.0),
        width_m: 3.01 * METER,
        height_maximum_m: 3.35,
        height_at_quarter_length_m: Some(3.35),
        height_at_three_quarters_length_m: Some(3.35),
        height_at_wing_root_quarter_chord_m: Some(3.35),
        area_side_projected_m2: Some(239.20),
        area_wetted_m2: Some(327.01),
        area_front_projected_m2: Some(8.0110),
        effective_diameter_m: Some(3.18),
        differential_pressure_pa: Some(1.0e5 * PASCAL),
        ..Fuselage::default()
    });

    // Propulsor
    let propeller = Propeller {
        number_of_blades: 2,
        freestream_velocity_m_s: 135.0 * MILE_PER_HOUR,
        angular_velocity_rad_s: 1_300.0 * RPM,
        tip_radius_m: 76.0 / 2.0 * INCH,
        hub_radius_m: 8.0 * INCH,
        design_lift_coefficient: 0.8,
        design_altitude_m: 12_000.0 * FOOT,
        design_thrust_n: Some(1_200.0),
        airfoil_geometry: airfoils::naca_4412_geometry(),
        airfoil_polars: airfoils::naca_4412_polars(),
        airfoil_polar_stations: airfoils::uniform_polar_stations(),
        ..Propeller::default()
    };

    let mut battery = Battery {
        mass_kg: 5_000.0 * KILOGRAM,
        specific_energy_j_per_kg: 207.0 * WATT_HOUR_PER_KILOGRAM,
        resistance_ohm: 0.006,
        max_voltage_v: 500.0,
        ..Battery::lithium_ion()
    };
    battery.initialize_from_mass();

    // Size the motor for the propeller design speed, as on the electric
    // Caravan.
    let motor_efficiency = 0.95;
    let bus_voltage = battery.max_voltage_v * 3.0 / 4.0;
    let no_load_current = 4.0;
    let fit = motor::fit_speed_constant(
        bus_voltage,
        propeller.angular_velocity_rad_s,
        motor_efficiency,
        no_load_current,
        SpeedConstantGrid::default(),
    )
    .ok_or(BuildError::InfeasibleMotorSizing)?;

    let motor = Motor {
        mass_kg: 10.0 * KILOGRAM,
        origin_m: propeller.origin_m.clone(),
        propeller_radius_m: propeller.tip_radius_m,
        speed_constant_rad_s_per_v: 0.35,
        resistance_ohm: fit.winding_resistance_ohm,
        no_load_current_a: no_load_current,
        gear_ratio: 1.0,
        gearbox_efficiency: 1.0,
        ..Motor::default()
    };

    let nacelle_diameter = 0.95 * METER;
    let engine_length = 2.25 * METER;
    let voltage = battery.max_voltage_v;
    vehicle.append_network(PropulsionNetwork::BatteryPropeller(BatteryPropeller {
        number_of_engines: 2,
        nacelle_diameter_m: nacelle_diameter,
        engine_length_m: engine_length,
        wetted_area_m2: 2.0 * PI * nacelle_diameter * engine_length,
        esc: ElectronicSpeedController { efficiency: 0.95 },
        propeller,
        battery,
        motor,
        payload: Payload {
            power_draw_w: 10.0,
            mass_kg: 1.0 * KILOGRAM,
        },
        avionics: Avionics {
            power_draw_w: 20.0,
            mass_uninstalled_kg: None,
        },
        voltage_v: voltage,
    }));

    Ok(vehicle)
}

/// Flight-phase configurations of the electric E190.
pub fn configurations(base: &Vehicle) -> Result<ConfigurationSet, BuildError> {
    let mut configs = ConfigurationSet::new();
    configs.append(Configuration::derived(base, "base"));
    configs.append(Configuration::derived(base, "cruise"));

    let mut config = Configuration::derived(base, "takeoff");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.set_deflection("main_wing", "slat", 25.0 * DEGREE)?;
    config.v2_vs_ratio = Some(1.21);
    configs.append(config);

    let mut config = Configuration::derived(base, "landing");
    config.set_deflection("main_wing", "flap", 30.0 * DEGREE)?;
    config.set_deflection("main_wing", "slat", 25.0 * DEGREE)?;
    config.vref_vs_ratio = Some(1.23);
    configs.append(config);

    let mut config = Configuration::derived(base, "short_field_takeoff");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.set_deflection("main_wing", "slat", 25.0 * DEGREE)?;
    config.v2_vs_ratio = Some(1.21);
    configs.append(config);

    Ok(configs)
}
