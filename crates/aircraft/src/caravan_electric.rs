//! Cessna 208 Caravan, battery-electric conversion with two wing-mounted
//! motors.

use std::f64::consts::PI;

use fleet_core::units::{
    DEGREE, FOOT, INCH, KILOGRAM, METER, MILE_PER_HOUR, RPM, WATT_HOUR_PER_KILOGRAM,
};
use fleet_propulsion::motor::{self, SpeedConstantGrid};
use fleet_propulsion::{
    Avionics, Battery, BatteryPropeller, ElectronicSpeedController, Motor, Payload, Propeller,
    PropulsionNetwork,
};
use fleet_vehicle::planform::wing_planform;
use fleet_vehicle::{
    Configuration, ConfigurationSet, ControlSurface, ControlSurfaceKind, Envelope,
    FlapConfiguration, Fuselage, GearLeg, LandingGear, MassProperties, Strut, Systems, Vehicle,
    Wing,
};

use crate::BuildError;
use crate::airfoils;

/// Build the electric Caravan vehicle record.
pub fn vehicle() -> Result<Vehicle, BuildError> {
    let mut vehicle = Vehicle::new("Cessna_208");

    // The maximum takeoff weight feeds the weights methods; the takeoff
    // weight seeds the mission and may fall below operating empty when the
    // energy budget runs long.
    vehicle.mass_properties = MassProperties {
        max_takeoff_kg: 3_629.0 * KILOGRAM,
        takeoff_kg: 3_645.0 * KILOGRAM,
        operating_empty_kg: Some(1_832.0 * KILOGRAM),
        max_zero_fuel_kg: Some(2_351.0 * KILOGRAM),
        cargo_kg: 372.0 * KILOGRAM,
        ..MassProperties::default()
    };
    // Typical FAR values for a transport of this type.
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
    vehicle.max_lift_coefficient_factor = Some(0.87889);

    // Landing gear, used by the noise analysis.
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
        thickness_to_chord: 0.15,
        taper: 0.616,
        span_m: 15.88 * METER,
        chord_root_m: 1.98 * METER,
        chord_tip_m: 1.22 * METER,
        mean_aerodynamic_chord_m: 1.63 * METER,
        area_reference_m2: 25.96,
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        vertical: false,
        symmetric: true,
        high_lift: true,
        dynamic_pressure_ratio: Some(1.0),
        ..Wing::default()
    };
    wing_planform(&mut wing);

    // Flap geometry in spanwise metres, as tabulated for this airframe.
    let flap_span = 4.84;
    let flap_start = 1.71 / 2.0;
    wing.append_control_surface(ControlSurface {
        span_fraction_start: flap_start,
        span_fraction_end: flap_start + flap_span,
        deflection_rad: 0.0 * DEGREE,
        chord_fraction: Some(0.41),
        configuration_type: Some(FlapConfiguration::SingleSlotted),
        ..ControlSurface::new("flap", ControlSurfaceKind::Flap)
    });
    wing.unblown_maximum_lift_coefficient = Some(1.521365534);
    vehicle.append_wing(wing);

    // Horizontal stabilizer
    let chord_root = 1.31;
    let chord_tip = 0.81;
    let area_reference = 13.22;
    vehicle.append_wing(Wing {
        tag: "horizontal_stabilizer".to_string(),
        aspect_ratio: 2.95,
        sweep_quarter_chord_rad: 2.05 * DEGREE,
        thickness_to_chord: 0.12,
        taper: 0.62,
        span_m: 6.25,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: (chord_root + chord_tip) / 2.0,
        area_reference_m2: area_reference,
        area_wetted_m2: Some(2.0 * (area_reference - 0.50 * chord_root)),
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        vertical: false,
        symmetric: true,
        ..Wing::default()
    });

    // Vertical stabilizer
    let chord_root = 2.21;
    let chord_tip = 0.84;
    let area_reference = 4.21;
    vehicle.append_wing(Wing {
        tag: "vertical_stabilizer".to_string(),
        aspect_ratio: 2.0,
        sweep_quarter_chord_rad: 14.06 * DEGREE,
        thickness_to_chord: 0.12,
        taper: 0.38,
        span_m: 3.05,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: (chord_root + chord_tip) / 2.0,
        area_reference_m2: area_reference,
        area_wetted_m2: Some(2.0 * area_reference),
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        vertical: true,
        symmetric: false,
        ..Wing::default()
    });

    // Fuselage
    let width = 1.71;
    let height_maximum = 2.10 + 0.68;
    let length_total = 16.67;
    let area_front_projected = width * height_maximum;
    let effective_diameter = (4.0 * area_front_projected / PI).sqrt();
    vehicle.append_fuselage(Fuselage {
        tag: "fuselage".to_string(),
        area_wetted_m2: Some(75.58),
        length_total_m: length_total,
        width_m: width,
        height_maximum_m: height_maximum,
        area_front_projected_m2: Some(area_front_projected),
        effective_diameter_m: Some(effective_diameter),
        fineness_ratio: Some(length_total / effective_diameter),
        strut: Some(Strut {
            thickness_to_chord: 0.12,
            chord_m: 0.3,
            length_m: 2.9,
        }),
        ..Fuselage::default()
    });

    // Propulsor
    let esc = ElectronicSpeedController { efficiency: 0.95 };

    let propeller = Propeller {
        number_of_blades: 2,
        freestream_velocity_m_s: 135.0 * MILE_PER_HOUR,
        angular_velocity_rad_s: 1_300.0 * RPM,
        tip_radius_m: 76.0 / 2.0 * INCH,
        hub_radius_m: 8.0 * INCH,
        design_lift_coefficient: 0.8,
        design_altitude_m: 12_000.0 * FOOT,
        design_thrust_n: Some(1_200.0),
        origin_m: vec![[2.0, 2.5, 0.784], [2.0, -2.5, 0.784]],
        rotation: vec![-1, 1],
        symmetry: true,
        airfoil_geometry: airfoils::naca_4412_geometry(),
        airfoil_polars: airfoils::naca_4412_polars(),
        airfoil_polar_stations: airfoils::uniform_polar_stations(),
        ..Propeller::default()
    };

    // The propeller washes the fuselage nose section.
    if let Some(fuselage) = vehicle.fuselages.first_mut() {
        fuselage.propeller_radius_m = Some(propeller.tip_radius_m);
    }

    let mut battery = Battery {
        mass_kg: 500.0 * KILOGRAM,
        specific_energy_j_per_kg: 350.0 * WATT_HOUR_PER_KILOGRAM,
        resistance_ohm: 0.006,
        max_voltage_v: 500.0,
        ..Battery::lithium_ion()
    };
    battery.initialize_from_mass();

    // Size the motor for the propeller design speed: sweep candidate speed
    // constants and keep the smallest feasible one, whose residual is the
    // implied winding resistance.
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

    let voltage = battery.max_voltage_v;
    vehicle.append_network(PropulsionNetwork::BatteryPropeller(BatteryPropeller {
        number_of_engines: 2,
        nacelle_diameter_m: 42.0 * INCH,
        engine_length_m: 0.01 * INCH,
        wetted_area_m2: 0.01 * (2.0 * PI * 0.01 / 2.0),
        esc,
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

/// Flight-phase configurations of the electric Caravan.
pub fn configurations(base: &Vehicle) -> Result<ConfigurationSet, BuildError> {
    let mut configs = ConfigurationSet::new();
    configs.append(Configuration::derived(base, "base"));
    configs.append(Configuration::derived(base, "cruise"));

    let mut config = Configuration::derived(base, "takeoff");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.v2_vs_ratio = Some(1.21);
    configs.append(config);

    let mut config = Configuration::derived(base, "landing");
    config.set_deflection("main_wing", "flap", 30.0 * DEGREE)?;
    config.vref_vs_ratio = Some(1.23);
    configs.append(config);

    let mut config = Configuration::derived(base, "short_field_takeoff");
    config.set_deflection("main_wing", "flap", 20.0 * DEGREE)?;
    config.v2_vs_ratio = Some(1.21);
    configs.append(config);

    Ok(configs)
}
