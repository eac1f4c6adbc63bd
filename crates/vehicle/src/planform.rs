//! Trapezoidal planform derivation.
//!
//! Given aspect ratio, reference area, taper, and quarter-chord sweep,
//! derive the span, chords, mean aerodynamic chord, wetted area, and
//! aerodynamic-center offset of a trapezoidal wing. Fields the study
//! assigns afterwards win over the derived values, matching the order of
//! assignment in the builders.

use crate::wing::Wing;

/// Spanwise station of the mean aerodynamic chord of a trapezoid.
pub fn mean_aerodynamic_chord_station_m(span_m: f64, taper: f64) -> f64 {
    span_m / 6.0 * (1.0 + 2.0 * taper) / (1.0 + taper)
}

/// Mean aerodynamic chord of a trapezoid.
pub fn mean_aerodynamic_chord_m(chord_root_m: f64, chord_tip_m: f64) -> f64 {
    2.0 / 3.0
        * (chord_root_m + chord_tip_m - chord_root_m * chord_tip_m / (chord_root_m + chord_tip_m))
}

/// Chordwise aerodynamic-center offset from the wing apex, quarter-chord
/// line convention.
pub fn trapezoid_aerodynamic_center_x_m(wing: &Wing) -> f64 {
    let y_mac = mean_aerodynamic_chord_station_m(wing.span_m, wing.taper);
    0.25 * wing.mean_aerodynamic_chord_m + y_mac * wing.sweep_quarter_chord_rad.tan()
}

/// Derive the trapezoidal planform in place from aspect ratio, reference
/// area, and taper.
pub fn wing_planform(wing: &mut Wing) {
    let sref = wing.area_reference_m2;
    let taper = wing.taper;

    let span = (wing.aspect_ratio * sref).sqrt();
    let chord_root = 2.0 * sref / (span * (1.0 + taper));
    let chord_tip = taper * chord_root;

    wing.span_m = span;
    wing.chord_root_m = chord_root;
    wing.chord_tip_m = chord_tip;
    wing.mean_aerodynamic_chord_m = mean_aerodynamic_chord_m(chord_root, chord_tip);
    wing.area_wetted_m2 = Some(2.0 * sref);
    wing.aerodynamic_center_m = Some([trapezoid_aerodynamic_center_x_m(wing), 0.0, 0.0]);
}
