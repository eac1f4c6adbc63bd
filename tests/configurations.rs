use electric_fleet_studies::aircraft::StudyAircraft;
use electric_fleet_studies::units::{DEGREE, RPM};
use electric_fleet_studies::vehicle::Configuration;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn flap_deflection(config: &Configuration) -> f64 {
    config
        .vehicle
        .wing("main_wing")
        .and_then(|w| w.control_surface("flap"))
        .map(|f| f.deflection_rad)
        .expect("main wing flap")
}

#[test]
fn conventional_caravan_has_six_configurations() {
    let vehicle = StudyAircraft::Caravan.vehicle().unwrap();
    let configs = StudyAircraft::Caravan.configurations(&vehicle).unwrap();
    let tags: Vec<_> = configs.tags().collect();
    assert_eq!(
        tags,
        ["base", "cruise", "takeoff", "approach", "landing", "stall"]
    );
    assert!(!configs.is_empty());
    // Every configuration clones the full vehicle record.
    assert!(configs.iter().all(|c| c.vehicle.tag == vehicle.tag));

    let takeoff = configs.get("takeoff").unwrap();
    assert!(close(flap_deflection(takeoff), 20.0 * DEGREE, 1e-12));
    assert!(close(takeoff.propeller_speed_rad_s.unwrap(), 1_900.0 * RPM, 1e-9));

    let approach = configs.get("approach").unwrap();
    assert!(close(flap_deflection(approach), 30.0 * DEGREE, 1e-12));
    assert!(close(approach.propeller_speed_rad_s.unwrap(), 1_750.0 * RPM, 1e-9));

    let landing = configs.get("landing").unwrap();
    assert!(close(landing.vref_vs_ratio.unwrap(), 1.23, 1e-12));
    assert!(close(landing.maximum_lift_coefficient.unwrap(), 2.0, 1e-12));
}

#[test]
fn overrides_never_touch_the_base_vehicle() {
    let vehicle = StudyAircraft::CaravanElectric.vehicle().unwrap();
    let configs = StudyAircraft::CaravanElectric
        .configurations(&vehicle)
        .unwrap();

    // The takeoff configuration deflects the flap; the base must not move.
    let takeoff = configs.get("takeoff").unwrap();
    assert!(close(flap_deflection(takeoff), 20.0 * DEGREE, 1e-12));
    let base_deflection = vehicle
        .wing("main_wing")
        .and_then(|w| w.control_surface("flap"))
        .unwrap()
        .deflection_rad;
    assert!(close(base_deflection, 0.0, 1e-12));

    let base_config = configs.get("base").unwrap();
    assert!(close(flap_deflection(base_config), 0.0, 1e-12));
}

#[test]
fn electric_caravan_exposes_field_length_ratios() {
    let vehicle = StudyAircraft::CaravanElectric.vehicle().unwrap();
    let configs = StudyAircraft::CaravanElectric
        .configurations(&vehicle)
        .unwrap();
    assert_eq!(configs.len(), 5);
    assert!(close(configs.get("takeoff").unwrap().v2_vs_ratio.unwrap(), 1.21, 1e-12));
    assert!(close(configs.get("landing").unwrap().vref_vs_ratio.unwrap(), 1.23, 1e-12));
    assert!(close(flap_deflection(configs.get("landing").unwrap()), 30.0 * DEGREE, 1e-12));
    let short_field = configs.get("short_field_takeoff").unwrap();
    assert!(close(short_field.v2_vs_ratio.unwrap(), 1.21, 1e-12));
}

#[test]
fn e190_deflects_flap_and_slat_together() {
    let vehicle = StudyAircraft::E190Electric.vehicle().unwrap();
    let configs = StudyAircraft::E190Electric.configurations(&vehicle).unwrap();
    let takeoff = configs.get("takeoff").unwrap();
    let slat = takeoff
        .vehicle
        .wing("main_wing")
        .and_then(|w| w.control_surface("slat"))
        .unwrap();
    assert!(close(slat.deflection_rad, 25.0 * DEGREE, 1e-12));
    assert!(close(flap_deflection(takeoff), 20.0 * DEGREE, 1e-12));
}

#[test]
fn unknown_lookup_tags_are_reported() {
    let vehicle = StudyAircraft::SkyhawkElectric.vehicle().unwrap();
    let mut config = Configuration::derived(&vehicle, "experiment");
    assert!(config.set_deflection("canard", "flap", 0.0).is_err());
    let err = config
        .set_deflection("main_wing", "spoiler", 0.0)
        .unwrap_err();
    assert!(err.to_string().contains("spoiler"));
}
