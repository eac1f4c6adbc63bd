//! Cessna 208 Caravan, conventional PT6-class piston-propeller baseline.

use fleet_core::units::{
    DEGREE, FOOT, HORSEPOWER, INCH, KILOGRAM, KNOT, METER, NAUTICAL_MILE, PASCAL, POUND, RPM,
};
use fleet_propulsion::{
    Avionics, InternalCombustionEngine, InternalCombustionPropeller, Propeller, PropulsionNetwork,
};
use fleet_vehicle::planform::wing_planform;
use fleet_vehicle::{
    Configuration, ConfigurationSet, ControlSurface, ControlSurfaceKind, Envelope,
    FlapConfiguration, Fuel, Fuselage, GearLeg, LandingGear, MassProperties, Propellant, Systems,
    Vehicle, Wing, WingSegment,
};

use crate::BuildError;
use crate::airfoils;

/// Build the baseline Caravan vehicle record.
pub fn vehicle() -> Vehicle {
    let mut vehicle = Vehicle::new("Cessna_208");

    // Vehicle-level properties. The takeoff weight is the 8 600 lb
    // calibration point rather than the certified maximum.
    vehicle.mass_properties = MassProperties {
        max_takeoff_kg: 3_629.0 * KILOGRAM,
        takeoff_kg: 8_600.0 * POUND,
        operating_empty_kg: Some(1_832.0 * KILOGRAM),
        max_zero_fuel_kg: Some(2_351.0 * KILOGRAM),
        cargo_kg: 1_400.0 * KILOGRAM,
        // CG at 28 % of the reference chord.
        center_of_gravity_m: Some([4.4634, 0.0, 0.0]),
        ..MassProperties::default()
    };
    vehicle.design_mach_number = Some(0.289);
    vehicle.design_range_m = Some(1_070.0 * NAUTICAL_MILE);
    vehicle.design_cruise_altitude_m = Some(25_000.0 * FOOT);
    vehicle.envelope = Envelope {
        ultimate_load: 3.75,
        limit_load: Some(2.5),
    };
    vehicle.reference_area_m2 = 25.96;
    vehicle.passengers = 10;
    vehicle.systems = Systems {
        control: "fully powered".to_string(),
        accessories: "medium range".to_string(),
    };

    // Landing gear
    vehicle.landing_gear = Some(LandingGear {
        tag: "main_landing_gear".to_string(),
        main: GearLeg {
            tire_diameter_m: Some(0.6 * METER),
            units: 2,
            wheels: 1,
            ..GearLeg::default()
        },
        nose: GearLeg {
            tire_diameter_m: Some(0.5 * METER),
            units: 1,
            wheels: 1,
            ..GearLeg::default()
        },
    });

    // Main wing
    let mut wing = Wing {
        tag: "main_wing".to_string(),
        aspect_ratio: 9.71,
        sweep_quarter_chord_rad: 2.74 * DEGREE,
        thickness_to_chord: 0.195,
        taper: 0.616,
        span_m: 15.875 * METER,
        chord_root_m: 1.98 * METER,
        chord_tip_m: 1.22 * METER,
        mean_aerodynamic_chord_m: 1.63 * METER,
        area_reference_m2: 25.96,
        area_wetted_m2: Some(51.82),
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        origin_m: Some([4.938, 0.0, 0.851]),
        aerodynamic_center_m: Some([0.0, 0.0, 0.0]),
        vertical: false,
        symmetric: true,
        high_lift: true,
        dynamic_pressure_ratio: Some(1.0),
        ..Wing::default()
    };

    wing.append_segment(WingSegment {
        tag: "Root".to_string(),
        percent_span_location: 0.0,
        twist_rad: 0.0 * DEGREE,
        root_chord_percent: 1.0,
        thickness_to_chord: 0.195,
        dihedral_outboard_rad: 3.0 * DEGREE,
        airfoil: Some(airfoils::caravan_section("C208a")),
        ..WingSegment::default()
    });
    wing.append_segment(WingSegment {
        tag: "Section_2".to_string(),
        percent_span_location: 0.5,
        twist_rad: 0.0 * DEGREE,
        root_chord_percent: 0.813,
        thickness_to_chord: 0.174,
        dihedral_outboard_rad: 3.0 * DEGREE,
        airfoil: Some(airfoils::caravan_section("C208b")),
        ..WingSegment::default()
    });
    wing.append_segment(WingSegment {
        tag: "Tip".to_string(),
        percent_span_location: 1.0,
        twist_rad: 0.0 * DEGREE,
        root_chord_percent: 0.626,
        thickness_to_chord: 0.141,
        dihedral_outboard_rad: 0.0,
        airfoil: Some(airfoils::caravan_section("C208c")),
        ..WingSegment::default()
    });

    wing.append_control_surface(ControlSurface {
        span_fraction_start: 0.855,
        span_fraction_end: 5.695,
        deflection_rad: 0.0 * DEGREE,
        chord_fraction: Some(0.41),
        configuration_type: Some(FlapConfiguration::SingleSlotted),
        ..ControlSurface::new("flap", ControlSurfaceKind::Flap)
    });

    wing_planform(&mut wing);
    vehicle.append_wing(wing);

    // Horizontal stabilizer
    let mut wing = Wing {
        tag: "horizontal_stabilizer".to_string(),
        aspect_ratio: 2.953,
        sweep_quarter_chord_rad: 4.575 * DEGREE,
        thickness_to_chord: 0.12,
        taper: 0.618,
        span_m: 6.248 * METER,
        chord_root_m: 1.31 * METER,
        chord_tip_m: 0.81 * METER,
        mean_aerodynamic_chord_m: 1.079 * METER,
        area_reference_m2: 13.22,
        area_wetted_m2: Some(26.44),
        area_exposed_m2: Some(11.152),
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        aerodynamic_center_m: Some([0.0, 0.0, 0.0]),
        vertical: false,
        symmetric: true,
        dynamic_pressure_ratio: Some(0.9),
        ..Wing::default()
    };
    wing.append_segment(WingSegment {
        tag: "root_segment".to_string(),
        percent_span_location: 0.0,
        twist_rad: 0.0 * DEGREE,
        root_chord_percent: 1.0,
        thickness_to_chord: 0.176,
        dihedral_outboard_rad: 0.0 * DEGREE,
        ..WingSegment::default()
    });
    wing.append_segment(WingSegment {
        tag: "tip_segment".to_string(),
        percent_span_location: 1.0,
        twist_rad: 0.0 * DEGREE,
        root_chord_percent: 0.623,
        thickness_to_chord: 0.282,
        dihedral_outboard_rad: 0.0 * DEGREE,
        ..WingSegment::default()
    });
    wing.append_control_surface(ControlSurface {
        deflection_rad: 0.0 * DEGREE,
        ..ControlSurface::new("elevator", ControlSurfaceKind::Elevator)
    });
    vehicle.append_wing(wing);

    // Vertical stabilizer
    let wing = Wing {
        tag: "vertical_stabilizer".to_string(),
        aspect_ratio: 1.21,
        sweep_quarter_chord_rad: 24.189 * DEGREE,
        thickness_to_chord: 0.12,
        taper: 0.38,
        span_m: 3.05 * METER,
        total_length_m: Some(3.05 * METER),
        chord_root_m: 2.21 * METER,
        chord_tip_m: 0.84 * METER,
        mean_aerodynamic_chord_m: 1.627 * METER,
        area_reference_m2: 4.21,
        area_wetted_m2: Some(8.42),
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        aerodynamic_center_m: Some([0.0, 0.0, 0.0]),
        vertical: true,
        symmetric: false,
        t_tail: false,
        dynamic_pressure_ratio: Some(1.0),
        ..Wing::default()
    };
    vehicle.append_wing(wing);

    // Fuselage
    vehicle.append_fuselage(Fuselage {
        tag: "fuselage".to_string(),
        number_coach_seats: Some(vehicle.passengers),
        seats_abreast: Some(2),
        seat_pitch_m: Some(1.0 * METER),
        // Nose fineness without the cabin fairing.
        fineness_nose: Some(1.500),
        fineness_tail: Some(3.104),
        length_nose_m: Some(2.285 * METER),
        length_tail_m: Some(4.529 * METER),
        length_total_m: 16.67 * METER,
        length_fore_space_m: Some(0.0 * METER),
        length_aft_space_m: Some(0.0 * METER),
        width_m: 1.878 * METER,
        height_maximum_m: 1.684 * METER,
        height_at_quarter_length_m: Some(1.684 * METER),
        height_at_three_quarters_length_m: Some(1.643 * METER),
        height_at_wing_root_quarter_chord_m: Some(1.684 * METER),
        area_side_projected_m2: Some(21.353),
        area_wetted_m2: Some(75.58),
        area_front_projected_m2: Some(3.163),
        effective_diameter_m: Some(1.781 * METER),
        differential_pressure_pa: Some(0.0 * PASCAL),
        ..Fuselage::default()
    });

    // Fuel
    let mut fuel = Fuel::new(Propellant::AviationGasoline, 1_009.0 * KILOGRAM, 2);
    fuel.origin_m = vehicle.main_wing().and_then(|w| w.origin_m);
    vehicle.fuel = Some(fuel);

    // Propulsor
    let propeller = Propeller {
        number_of_blades: 2,
        freestream_velocity_m_s: 200.0 * KNOT,
        angular_velocity_rad_s: 1_850.0 * RPM,
        tip_radius_m: 53.0 * INCH,
        hub_radius_m: 0.15 * INCH,
        design_lift_coefficient: 0.4,
        design_altitude_m: 20_000.0 * FOOT,
        design_power_w: Some(675.0 * HORSEPOWER),
        airfoil_geometry: airfoils::naca_4412_geometry(),
        airfoil_polars: airfoils::naca_4412_polars(),
        airfoil_polar_stations: airfoils::uniform_polar_stations(),
        ..Propeller::default()
    };

    vehicle.append_network(PropulsionNetwork::InternalCombustion(
        InternalCombustionPropeller {
            number_of_engines: 1,
            nacelle_diameter_m: 0.2 * METER,
            engine_length_m: 0.01 * METER,
            wetted_area_m2: 0.01,
            engine: InternalCombustionEngine {
                sea_level_power_w: 675.0 * HORSEPOWER,
                flat_rate_altitude_m: 0.0,
                rated_speed_rad_s: 1_900.0 * RPM,
                power_specific_fuel_consumption: 0.64,
            },
            propeller,
        },
    ));

    // Uninstalled avionics weight for the weights method.
    vehicle.avionics = Some(Avionics {
        power_draw_w: 0.0,
        mass_uninstalled_kg: Some(2.0 * POUND),
    });

    vehicle
}

/// Flight-phase configurations of the baseline Caravan.
pub fn configurations(base: &Vehicle) -> Result<ConfigurationSet, BuildError> {
    let mut configs = ConfigurationSet::new();
    configs.append(Configuration::derived(base, "base"));

    let mut config = Configuration::derived(base, "cruise");
    config.set_deflection("main_wing", "flap", 0.0 * DEGREE)?;
    configs.append(config);

    let mut config = Configuration::derived(base, "takeoff");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.propeller_speed_rad_s = Some(1_900.0 * RPM);
    configs.append(config);

    let mut config = Configuration::derived(base, "approach");
    config.set_deflection("main_wing", "flap", 30.0 * DEGREE)?;
    config.propeller_speed_rad_s = Some(1_750.0 * RPM);
    configs.append(config);

    let mut config = Configuration::derived(base, "landing");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.vref_vs_ratio = Some(1.23);
    config.maximum_lift_coefficient = Some(2.0);
    configs.append(config);

    let mut config = Configuration::derived(base, "stall");
    config.set_deflection("main_wing", "flap", 30.0 * DEGREE)?;
    config.propeller_speed_rad_s = Some(1_900.0 * RPM);
    configs.append(config);

    Ok(configs)
}
