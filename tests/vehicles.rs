use electric_fleet_studies::aircraft::StudyAircraft;
use electric_fleet_studies::propulsion::PropulsionNetwork;
use electric_fleet_studies::units::{self, FOOT, HORSEPOWER, INCH, POUND};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn every_study_aircraft_builds() {
    for aircraft in StudyAircraft::ALL {
        let vehicle = aircraft.vehicle().expect(aircraft.name());
        assert!(!vehicle.tag.is_empty());
        assert!(vehicle.mass_properties.max_takeoff_kg > 0.0, "{}", aircraft.name());
        assert!(vehicle.mass_properties.takeoff_kg > 0.0);
        assert!(vehicle.reference_area_m2 > 0.0);
        assert!(vehicle.main_wing().is_some(), "{}", aircraft.name());
        assert!(!vehicle.fuselages.is_empty());
        assert_eq!(vehicle.networks.len(), 1);
        for wing in &vehicle.wings {
            assert!(wing.span_m > 0.0, "{} {}", aircraft.name(), wing.tag);
            assert!(wing.area_reference_m2 > 0.0);
            assert!(wing.chord_root_m > 0.0);
            assert!(wing.mean_aerodynamic_chord_m > 0.0);
        }
    }
}

#[test]
fn aspect_ratio_identity_holds_where_derived() {
    // Wings whose builders derive aspect ratio or span from one another.
    let cases = [
        (StudyAircraft::CaravanElectric, vec!["main_wing"]),
        (StudyAircraft::CaravanSolar, vec!["main_wing"]),
        (
            StudyAircraft::SkyhawkElectric,
            vec!["main_wing", "horizontal_stabilizer", "vertical_stabilizer"],
        ),
        (
            StudyAircraft::E190Electric,
            vec!["main_wing", "horizontal_stabilizer", "vertical_stabilizer"],
        ),
    ];
    for (aircraft, tags) in cases {
        let vehicle = aircraft.vehicle().expect(aircraft.name());
        for tag in tags {
            let wing = vehicle.wing(tag).expect(tag);
            assert!(
                close(
                    wing.aspect_ratio,
                    wing.span_m * wing.span_m / wing.area_reference_m2,
                    1e-6
                ),
                "{} {}",
                aircraft.name(),
                tag
            );
        }
    }
}

#[test]
fn averaged_mac_matches_where_entered_that_way() {
    let vehicle = StudyAircraft::CaravanSolar.vehicle().unwrap();
    for tag in ["main_wing", "horizontal_stabilizer", "vertical_stabilizer"] {
        let wing = vehicle.wing(tag).unwrap();
        assert!(close(
            wing.mean_aerodynamic_chord_m,
            (wing.chord_root_m + wing.chord_tip_m) / 2.0,
            1e-12
        ));
    }
}

#[test]
fn conventional_caravan_carries_fuel_and_a_piston_engine() {
    let vehicle = StudyAircraft::Caravan.vehicle().unwrap();
    assert_eq!(vehicle.tag, "Cessna_208");
    assert!(close(vehicle.mass_properties.takeoff_kg, 8_600.0 * POUND, 1e-6));
    assert!(close(vehicle.design_cruise_altitude_m.unwrap(), 25_000.0 * FOOT, 1e-6));

    let fuel = vehicle.fuel.as_ref().expect("fuel system");
    assert!(close(fuel.mass_kg, 1_009.0, 1e-12));
    assert!(close(fuel.internal_volume_m3, 1_009.0 / 721.0, 1e-9));
    assert_eq!(fuel.number_of_tanks, 2);
    assert!(close(fuel.propellant.specific_energy_j_per_kg(), 43.71e6, 1e-3));

    assert!(vehicle.network("internal_combustion").is_some());
    assert!(vehicle.network("battery_propeller").is_none());
    match &vehicle.networks[0] {
        PropulsionNetwork::InternalCombustion(net) => {
            assert_eq!(net.number_of_engines, 1);
            assert!(close(net.engine.sea_level_power_w, 675.0 * HORSEPOWER, 1e-6));
            assert!(close(net.engine.rated_speed_rad_s, 1_900.0 * units::RPM, 1e-9));
            assert!(close(net.engine.power_specific_fuel_consumption, 0.64, 1e-12));
            assert_eq!(net.propeller.number_of_blades, 2);
            assert!(close(net.propeller.tip_radius_m, 53.0 * INCH, 1e-12));
        }
        other => panic!("expected a piston network, found {}", other.tag()),
    }

    // Three spanwise breaks with pinned section files on the main wing.
    let wing = vehicle.main_wing().unwrap();
    assert_eq!(wing.segments.len(), 3);
    assert!(wing.segments.iter().all(|s| s.airfoil.is_some()));
    assert_eq!(vehicle.wings.len(), 3);
}

#[test]
fn electric_caravan_battery_and_motor_sizing() {
    let vehicle = StudyAircraft::CaravanElectric.vehicle().unwrap();
    let net = vehicle.battery_propeller().expect("battery network");

    assert_eq!(net.number_of_engines, 2);
    // 500 kg at 350 Wh/kg.
    assert!(close(net.battery.max_energy_j, 500.0 * 350.0 * 3_600.0, 1e-3));
    assert!(close(net.battery.max_power_w, 500.0 * 1_000.0, 1e-6));
    assert!(close(net.voltage_v, 500.0, 1e-12));

    // The sweep selects the smallest feasible speed constant for 375 V at
    // 1 300 rpm, which lands just above omega over v.
    assert!(net.motor.resistance_ohm > 0.0);
    assert!(net.motor.resistance_ohm < 0.1);
    assert!(close(net.motor.speed_constant_rad_s_per_v, 0.35, 1e-12));
    assert!(close(net.motor.no_load_current_a, 4.0, 1e-12));

    // Two counter-rotating wing-mounted units.
    assert_eq!(net.propeller.origin_m.len(), 2);
    assert_eq!(net.propeller.rotation, vec![-1, 1]);
    assert!(net.propeller.symmetry);

    // The fuselage record sees the propeller radius.
    let fuselage = &vehicle.fuselages[0];
    assert!(close(
        fuselage.propeller_radius_m.unwrap(),
        net.propeller.tip_radius_m,
        1e-12
    ));
    assert!(fuselage.strut.is_some());

    let wing = vehicle.main_wing().unwrap();
    assert!(close(wing.unblown_maximum_lift_coefficient.unwrap(), 1.521365534, 1e-12));
}

#[test]
fn solar_caravan_panel_is_sized_from_the_wing() {
    let vehicle = StudyAircraft::CaravanSolar.vehicle().unwrap();
    match &vehicle.networks[0] {
        PropulsionNetwork::Solar(net) => {
            assert!(close(net.solar_panel.area_m2, 25.96 * 0.9, 1e-9));
            assert!(close(net.solar_panel.mass_kg, net.solar_panel.area_m2 * 0.60, 1e-9));
            assert!(close(net.solar_panel.efficiency, 0.25, 1e-12));
            assert!(close(net.solar_logic.mppt_efficiency, 0.95, 1e-12));
            assert!(close(net.solar_logic.system_voltage_v, 40.0, 1e-12));
            assert!(close(net.battery.max_energy_j, 300.0 * 207.0 * 3_600.0, 1e-3));
            // Power coefficient estimated at the 9 000 ft design point.
            assert!(net.propeller.design_power_coefficient.is_some());
            assert_eq!(
                net.motor.propeller_power_coefficient,
                net.propeller.design_power_coefficient
            );
        }
        other => panic!("expected a solar network, found {}", other.tag()),
    }
    // Taper is assigned before the chords that derive from it.
    let wing = vehicle.main_wing().unwrap();
    let chord_root = 2.0 * 25.96 / (15.875 * (1.0 + 0.586));
    assert!(close(wing.chord_root_m, chord_root, 1e-9));
    assert!(close(wing.chord_tip_m, chord_root * 0.586, 1e-9));
}

#[test]
fn skyhawk_design_point_comes_from_the_atmosphere() {
    let vehicle = StudyAircraft::SkyhawkElectric.vehicle().unwrap();
    let mach = vehicle.design_mach_number.unwrap();
    // 124 kt against the sea-level speed of sound.
    assert!(mach > 0.185 && mach < 0.19, "mach {mach}");
    let q = vehicle.design_dynamic_pressure_pa.unwrap();
    assert!(q > 1_800.0 && q < 2_100.0, "q {q}");

    let net = vehicle.battery_propeller().unwrap();
    assert_eq!(net.number_of_engines, 1);
    assert!(close(net.esc.efficiency, 0.99, 1e-12));
    assert!(close(net.motor.gear_ratio, 4.0, 1e-12));
    assert!(close(net.motor.gearbox_efficiency, 0.938, 1e-12));
    assert!(net.motor.propeller_power_coefficient.is_some());

    // Inverted taper convention on this data sheet: root over tip.
    let wing = vehicle.main_wing().unwrap();
    assert!(wing.taper > 1.0);
}

#[test]
fn e190_wings_are_planform_derived() {
    let vehicle = StudyAircraft::E190Electric.vehicle().unwrap();
    let wing = vehicle.main_wing().unwrap();
    // wing_planform rederives the span from aspect ratio and area.
    assert!(close(wing.span_m, (8.4f64 * 92.0).sqrt(), 1e-9));
    assert!(close(
        wing.area_exposed_m2.unwrap(),
        0.8 * wing.area_wetted_m2.unwrap(),
        1e-9
    ));
    assert_eq!(wing.segments.len(), 4);

    let mass = &vehicle.mass_properties;
    assert!(mass.moments_of_inertia_kg_m2.is_some());
    assert!(close(mass.max_payload_kg.unwrap(), 13_063.0, 1e-12));

    let net = vehicle.battery_propeller().unwrap();
    assert!(close(net.battery.max_energy_j, 5_000.0 * 207.0 * 3_600.0, 1e-3));
    assert!(close(net.wetted_area_m2, 2.0 * std::f64::consts::PI * 0.95 * 2.25, 1e-9));
}
