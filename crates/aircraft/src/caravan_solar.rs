//! Cessna 208 Caravan, solar-electric conversion: wing-mounted photovoltaic
//! panel and MPPT logic ahead of the battery bus.

use std::f64::consts::PI;

use fleet_core::atmosphere::us_standard_1976;
use fleet_core::units::{
    DEGREE, FOOT, HORSEPOWER, INCH, KILOGRAM, KNOT, METER, POUND, RPM, WATT_HOUR_PER_KILOGRAM,
};
use fleet_propulsion::{
    Avionics, Battery, ElectronicSpeedController, Motor, Payload, Propeller, PropulsionNetwork,
    SolarLogic, SolarNetwork, SolarPanel, SolarRadiation,
};
use fleet_vehicle::{
    Configuration, ConfigurationSet, ControlSurface, ControlSurfaceKind, Envelope,
    FlapConfiguration, Fuselage, GearLeg, LandingGear, MassProperties, Strut, Systems, Vehicle,
    Wing,
};

use crate::BuildError;
use crate::airfoils;

/// Build the solar-electric Caravan vehicle record.
pub fn vehicle() -> Vehicle {
    let mut vehicle = Vehicle::new("Cessna_208");

    vehicle.mass_properties = MassProperties {
        max_takeoff_kg: 8_750.0 * POUND,
        takeoff_kg: 8_750.0 * POUND,
        ramp_kg: Some(8_785.0 * POUND),
        cargo_kg: 0.0,
        max_landing_kg: Some(8_500.0 * POUND),
        ..MassProperties::default()
    };
    vehicle.envelope = Envelope {
        ultimate_load: 3.8,
        limit_load: None,
    };
    vehicle.reference_area_m2 = 25.96;
    vehicle.passengers = 11;
    vehicle.systems = Systems {
        control: "fully powered".to_string(),
        accessories: "medium range".to_string(),
    };
    vehicle.max_lift_coefficient_factor = Some(0.87889);

    // Main wing, chords derived from reference area, span, and taper.
    let taper = 0.586;
    let span = 15.875;
    let area_reference = vehicle.reference_area_m2;
    let chord_root = 2.0 * area_reference / (span * (1.0 + taper));
    let chord_tip = chord_root * taper;
    let mut wing = Wing {
        tag: "main_wing".to_string(),
        sweep_quarter_chord_rad: 2.93 * DEGREE,
        thickness_to_chord: 0.15,
        area_reference_m2: area_reference,
        span_m: span,
        taper,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: (chord_root + chord_tip) / 2.0,
        aspect_ratio: span * span / area_reference,
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        vertical: false,
        symmetric: true,
        high_lift: true,
        ..Wing::default()
    };
    let flap_start = 1.71 / 2.0;
    wing.append_control_surface(ControlSurface {
        span_fraction_start: flap_start,
        span_fraction_end: flap_start + 4.84,
        deflection_rad: 0.0 * DEGREE,
        chord_fraction: Some(0.41),
        configuration_type: Some(FlapConfiguration::SingleSlotted),
        ..ControlSurface::new("flap", ControlSurfaceKind::Flap)
    });
    vehicle.append_wing(wing);

    // Horizontal stabilizer
    let chord_root = 1.31;
    let chord_tip = 0.81;
    vehicle.append_wing(Wing {
        tag: "horizontal_stabilizer".to_string(),
        sweep_quarter_chord_rad: 2.05 * DEGREE,
        thickness_to_chord: 0.12,
        area_reference_m2: 13.22,
        span_m: 6.25,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: (chord_root + chord_tip) / 2.0,
        taper: 0.62,
        aspect_ratio: 2.95,
        twist_root_rad: 0.0 * DEGREE,
        twist_tip_rad: 0.0 * DEGREE,
        vertical: false,
        symmetric: true,
        ..Wing::default()
    });

    // Vertical stabilizer
    let chord_root = 2.21;
    let chord_tip = 0.84;
    vehicle.append_wing(Wing {
        tag: "vertical_stabilizer".to_string(),
        sweep_quarter_chord_rad: 14.06 * DEGREE,
        thickness_to_chord: 0.12,
        area_reference_m2: 4.21,
        span_m: 3.05,
        chord_root_m: chord_root,
        chord_tip_m: chord_tip,
        mean_aerodynamic_chord_m: (chord_root + chord_tip) / 2.0,
        taper: 0.38,
        aspect_ratio: 2.0,
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
    vehicle.append_fuselage(Fuselage {
        tag: "fuselage".to_string(),
        width_m: width,
        height_maximum_m: height_maximum,
        length_total_m: length_total,
        area_wetted_m2: Some(75.58),
        height_at_quarter_length_m: Some(height_maximum),
        height_at_three_quarters_length_m: Some(height_maximum),
        height_at_wing_root_quarter_chord_m: Some(0.68),
        area_front_projected_m2: Some(area_front_projected),
        area_side_projected_m2: Some(length_total * height_maximum),
        effective_diameter_m: Some((4.0 * area_front_projected / PI).sqrt()),
        strut: Some(Strut {
            thickness_to_chord: 0.12,
            chord_m: 0.3,
            length_m: 2.9,
        }),
        ..Fuselage::default()
    });

    // Landing gear, with per-leg drag counts for the parasite buildup.
    vehicle.landing_gear = Some(LandingGear {
        tag: String::new(),
        main: GearLeg {
            tag: Some("main_ldg".to_string()),
            drag_coefficient: Some(0.615),
            tire_diameter_m: Some(0.6),
            tire_width_m: Some(0.2),
            ..GearLeg::default()
        },
        nose: GearLeg {
            tag: Some("nose_ldg".to_string()),
            drag_coefficient: Some(1.9),
            tire_diameter_m: Some(0.5),
            tire_width_m: Some(0.18),
            ..GearLeg::default()
        },
    });

    // Propulsor
    let mut propeller = Propeller {
        number_of_blades: 3,
        freestream_velocity_m_s: 170.0 * KNOT,
        angular_velocity_rad_s: 1_900.0 * RPM,
        tip_radius_m: 53.0 * INCH,
        hub_radius_m: 0.15 * METER,
        design_lift_coefficient: 0.4,
        design_altitude_m: 9_000.0 * FOOT,
        design_thrust_n: None,
        design_power_w: Some(600.0 * HORSEPOWER),
        activity_factor: Some(90.0),
        airfoil_geometry: airfoils::naca_4412_geometry(),
        airfoil_polars: airfoils::naca_4412_polars(),
        airfoil_polar_stations: airfoils::uniform_polar_stations(),
        ..Propeller::default()
    };
    let design_density = us_standard_1976(propeller.design_altitude_m).density_kg_m3;
    propeller.design_power_coefficient = propeller.ideal_power_coefficient(design_density);

    let motor = Motor {
        resistance_ohm: 0.008,
        no_load_current_a: 700.0,
        speed_constant_rad_s_per_v: 1_800.0 * RPM,
        propeller_radius_m: propeller.tip_radius_m,
        propeller_power_coefficient: propeller.design_power_coefficient,
        expected_current_a: Some(1_000.0),
        gear_ratio: 1.0,
        gearbox_efficiency: 1.0,
        mass_kg: 248.0 * KILOGRAM,
        ..Motor::default()
    };

    let mut battery = Battery {
        mass_kg: 300.0 * KILOGRAM,
        specific_energy_j_per_kg: 207.0 * WATT_HOUR_PER_KILOGRAM,
        resistance_ohm: 0.05,
        max_voltage_v: 900.0,
        ..Battery::lithium_ion()
    };
    battery.initialize_from_mass();

    let panel_area = vehicle.reference_area_m2 * 0.9;
    let voltage = battery.max_voltage_v;
    vehicle.append_network(PropulsionNetwork::Solar(SolarNetwork {
        number_of_engines: 1,
        nacelle_diameter_m: 0.2 * METER,
        engine_length_m: 0.01 * METER,
        wetted_area_m2: 0.01 * (2.0 * PI * 0.01 / 2.0),
        esc: ElectronicSpeedController { efficiency: 0.95 },
        solar_flux: SolarRadiation,
        solar_panel: SolarPanel {
            area_m2: panel_area,
            efficiency: 0.25,
            mass_kg: panel_area * (0.60 * KILOGRAM),
        },
        propeller,
        motor,
        payload: Payload {
            power_draw_w: 50.0,
            mass_kg: 5.0 * KILOGRAM,
        },
        avionics: Avionics {
            power_draw_w: 50.0,
            mass_uninstalled_kg: None,
        },
        battery,
        solar_logic: SolarLogic {
            system_voltage_v: 40.0,
            mppt_efficiency: 0.95,
        },
        voltage_v: voltage,
    }));

    vehicle
}

/// Flight-phase configurations of the solar-electric Caravan.
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
