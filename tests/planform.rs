use electric_fleet_studies::units::DEGREE;
use electric_fleet_studies::vehicle::planform::{
    mean_aerodynamic_chord_m, mean_aerodynamic_chord_station_m, wing_planform,
};
use electric_fleet_studies::vehicle::Wing;

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn caravan_like_wing() -> Wing {
    Wing {
        tag: "main_wing".to_string(),
        aspect_ratio: 9.71,
        area_reference_m2: 25.96,
        taper: 0.616,
        sweep_quarter_chord_rad: 2.74 * DEGREE,
        ..Wing::default()
    }
}

#[test]
fn derived_span_preserves_the_aspect_ratio_identity() {
    let mut wing = caravan_like_wing();
    wing_planform(&mut wing);
    assert!(close(
        wing.aspect_ratio,
        wing.span_m * wing.span_m / wing.area_reference_m2,
        1e-9
    ));
    // The derived span lands on the published 15.88 m.
    assert!(close(wing.span_m, 15.877, 5e-3));
}

#[test]
fn trapezoid_chords_recover_the_reference_area() {
    let mut wing = caravan_like_wing();
    wing_planform(&mut wing);
    let area = (wing.chord_root_m + wing.chord_tip_m) / 2.0 * wing.span_m;
    assert!(close(area, wing.area_reference_m2, 1e-9));
    assert!(close(wing.chord_tip_m / wing.chord_root_m, wing.taper, 1e-12));
}

#[test]
fn mac_formula_matches_the_taper_closed_form() {
    let chord_root: f64 = 1.98;
    let taper: f64 = 0.616;
    let chord_tip = chord_root * taper;
    let mac = mean_aerodynamic_chord_m(chord_root, chord_tip);
    let closed_form = chord_root * 2.0 / 3.0 * (1.0 + taper + taper * taper) / (1.0 + taper);
    assert!(close(mac, closed_form, 1e-12));
    // MAC sits between tip and root chord.
    assert!(mac > chord_tip && mac < chord_root);
}

#[test]
fn mac_station_is_inboard_of_the_semispan() {
    let station = mean_aerodynamic_chord_station_m(15.88, 0.616);
    assert!(station > 0.0 && station < 15.88 / 2.0);
}

#[test]
fn planform_sets_wetted_area_and_aerodynamic_center() {
    let mut wing = caravan_like_wing();
    wing_planform(&mut wing);
    assert!(close(wing.area_wetted_m2.unwrap(), 2.0 * 25.96, 1e-12));
    let ac = wing.aerodynamic_center_m.unwrap();
    // Quarter-chord offset plus a small sweep contribution.
    assert!(ac[0] > 0.25 * wing.mean_aerodynamic_chord_m);
    assert!(ac[0] < wing.chord_root_m);
}

#[test]
fn unswept_wing_aerodynamic_center_is_the_quarter_chord() {
    let mut wing = caravan_like_wing();
    wing.sweep_quarter_chord_rad = 0.0;
    wing_planform(&mut wing);
    let ac = wing.aerodynamic_center_m.unwrap();
    assert!(close(ac[0], 0.25 * wing.mean_aerodynamic_chord_m, 1e-12));
}
