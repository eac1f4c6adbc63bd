//! Fuselage record, including the strut attachment of braced designs.

/// Fuselage geometry and cabin layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fuselage {
    pub tag: String,
    pub number_coach_seats: Option<u32>,
    pub seats_abreast: Option<u32>,
    pub seat_pitch_m: Option<f64>,
    pub fineness_nose: Option<f64>,
    pub fineness_tail: Option<f64>,
    pub fineness_ratio: Option<f64>,
    pub length_nose_m: Option<f64>,
    pub length_tail_m: Option<f64>,
    pub length_cabin_m: Option<f64>,
    pub length_empennage_m: Option<f64>,
    pub length_structure_m: Option<f64>,
    pub length_total_m: f64,
    pub length_fore_space_m: Option<f64>,
    pub length_aft_space_m: Option<f64>,
    pub width_m: f64,
    pub height_maximum_m: f64,
    pub height_at_quarter_length_m: Option<f64>,
    pub height_at_three_quarters_length_m: Option<f64>,
    pub height_at_wing_root_quarter_chord_m: Option<f64>,
    pub area_side_projected_m2: Option<f64>,
    pub area_wetted_m2: Option<f64>,
    pub area_front_projected_m2: Option<f64>,
    pub effective_diameter_m: Option<f64>,
    pub differential_pressure_pa: Option<f64>,
    pub volume_m3: Option<f64>,
    pub internal_volume_m3: Option<f64>,
    /// Wing-brace strut of strut-braced layouts.
    pub strut: Option<Strut>,
    /// Radius of the propeller washing the fuselage nose (m).
    pub propeller_radius_m: Option<f64>,
}

/// Wing-brace strut cross-section and length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strut {
    pub thickness_to_chord: f64,
    pub chord_m: f64,
    pub length_m: f64,
}
