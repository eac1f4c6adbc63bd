use electric_fleet_studies::units;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn library_reports_a_version() {
    assert!(!electric_fleet_studies::version().is_empty());
}

#[test]
fn length_round_trips() {
    assert!(close(25_000.0 * units::FOOT, 25_000.0 * 0.3048, 1e-9));
    assert!(close((53.0 * units::INCH) / 0.0254, 53.0, 1e-9));
    assert!(close(1_070.0 * units::NAUTICAL_MILE, 1_070.0 * 1_852.0, 1e-6));
}

#[test]
fn speed_conversions_match_definitions() {
    // A knot is one nautical mile per hour.
    assert!(close(units::KNOT * 3_600.0, 1_852.0, 1e-9));
    assert!(close(135.0 * units::MILE_PER_HOUR, 60.3504, 1e-4));
    assert!(close(800.0 * units::FOOT_PER_MINUTE, 4.064, 1e-9));
}

#[test]
fn angular_rates_are_stored_in_rad_s() {
    assert!(close(60.0 * units::RPM, std::f64::consts::TAU, 1e-12));
    assert!(close(units::rad_s_to_rpm(1_300.0 * units::RPM), 1_300.0, 1e-9));
}

#[test]
fn mass_power_and_energy_factors() {
    assert!(close(2_550.0 * units::POUND, 1_156.6605435, 1e-6));
    assert!(close(675.0 * units::HORSEPOWER, 503_347.4136, 1e-3));
    assert!(close(350.0 * units::WATT_HOUR_PER_KILOGRAM, 1.26e6, 1e-6));
    assert!(close(8.0 * units::PSI, 55_158.058345, 1e-3));
}

#[test]
fn degree_helpers_agree_with_the_constant() {
    assert!(close(units::deg_to_rad(180.0), std::f64::consts::PI, 1e-12));
    assert!(close(units::rad_to_deg(20.0 * units::DEGREE), 20.0, 1e-9));
}

#[test]
fn standard_atmosphere_slice_matches_the_tables() {
    use electric_fleet_studies::atmosphere::us_standard_1976;

    let sea_level = us_standard_1976(0.0);
    assert!(close(sea_level.temperature_k, 288.15, 1e-9));
    assert!(close(sea_level.pressure_pa, 101_325.0, 1e-6));
    assert!(close(sea_level.density_kg_m3, 1.225, 1e-3));
    assert!(close(sea_level.speed_of_sound_m_s, 340.29, 0.05));

    // 8 500 ft, the Skyhawk design altitude.
    let cruise = us_standard_1976(8_500.0 * units::FOOT);
    assert!(cruise.temperature_k < sea_level.temperature_k);
    assert!(cruise.density_kg_m3 > 0.90 && cruise.density_kg_m3 < 1.0);

    // The isothermal layer holds temperature above the tropopause.
    let strat = us_standard_1976(12_000.0);
    assert!(close(strat.temperature_k, 216.65, 1e-6));
    assert!(strat.pressure_pa < us_standard_1976(11_000.0).pressure_pa);
}
