//! Wing records: planform, spanwise segments, and control surfaces.

use std::path::PathBuf;

/// One lifting surface: main wing, horizontal tail, or vertical tail.
#[derive(Debug, Clone, PartialEq)]
pub struct Wing {
    pub tag: String,
    pub aspect_ratio: f64,
    pub sweep_quarter_chord_rad: f64,
    pub thickness_to_chord: f64,
    /// Taper ratio as entered by the study (tip/root for most, root/tip
    /// where the original data sheet uses that convention).
    pub taper: f64,
    pub dihedral_rad: Option<f64>,
    pub span_m: f64,
    pub total_length_m: Option<f64>,
    pub chord_root_m: f64,
    pub chord_tip_m: f64,
    pub mean_aerodynamic_chord_m: f64,
    pub area_reference_m2: f64,
    pub area_wetted_m2: Option<f64>,
    pub area_exposed_m2: Option<f64>,
    pub twist_root_rad: f64,
    pub twist_tip_rad: f64,
    pub origin_m: Option<[f64; 3]>,
    pub aerodynamic_center_m: Option<[f64; 3]>,
    pub vertical: bool,
    pub symmetric: bool,
    pub t_tail: bool,
    /// Enables the high-lift paths of the maximum-lift methods.
    pub high_lift: bool,
    /// Local to freestream dynamic-pressure ratio used by the stability
    /// methods.
    pub dynamic_pressure_ratio: Option<f64>,
    pub unblown_maximum_lift_coefficient: Option<f64>,
    pub segments: Vec<WingSegment>,
    pub control_surfaces: Vec<ControlSurface>,
}

impl Default for Wing {
    fn default() -> Self {
        Wing {
            tag: String::new(),
            aspect_ratio: 0.0,
            sweep_quarter_chord_rad: 0.0,
            thickness_to_chord: 0.0,
            taper: 0.0,
            dihedral_rad: None,
            span_m: 0.0,
            total_length_m: None,
            chord_root_m: 0.0,
            chord_tip_m: 0.0,
            mean_aerodynamic_chord_m: 0.0,
            area_reference_m2: 0.0,
            area_wetted_m2: None,
            area_exposed_m2: None,
            twist_root_rad: 0.0,
            twist_tip_rad: 0.0,
            origin_m: None,
            aerodynamic_center_m: None,
            vertical: false,
            symmetric: false,
            t_tail: false,
            high_lift: false,
            dynamic_pressure_ratio: None,
            unblown_maximum_lift_coefficient: None,
            segments: Vec::new(),
            control_surfaces: Vec::new(),
        }
    }
}

impl Wing {
    pub fn append_segment(&mut self, segment: WingSegment) {
        self.segments.push(segment);
    }

    pub fn append_control_surface(&mut self, surface: ControlSurface) {
        self.control_surfaces.push(surface);
    }

    pub fn control_surface(&self, tag: &str) -> Option<&ControlSurface> {
        self.control_surfaces.iter().find(|s| s.tag == tag)
    }

    pub fn control_surface_mut(&mut self, tag: &str) -> Option<&mut ControlSurface> {
        self.control_surfaces.iter_mut().find(|s| s.tag == tag)
    }
}

/// Spanwise wing section used by the vortex-lattice and geometry exports.
#[derive(Debug, Clone, PartialEq)]
pub struct WingSegment {
    pub tag: String,
    /// Spanwise station as a fraction of the semispan.
    pub percent_span_location: f64,
    pub twist_rad: f64,
    /// Local chord as a fraction of the root chord.
    pub root_chord_percent: f64,
    pub thickness_to_chord: f64,
    pub dihedral_outboard_rad: f64,
    pub sweep_quarter_chord_rad: Option<f64>,
    /// Section coordinate file, when the study pins one.
    pub airfoil: Option<PathBuf>,
}

impl Default for WingSegment {
    fn default() -> Self {
        WingSegment {
            tag: String::new(),
            percent_span_location: 0.0,
            twist_rad: 0.0,
            root_chord_percent: 1.0,
            thickness_to_chord: 0.0,
            dihedral_outboard_rad: 0.0,
            sweep_quarter_chord_rad: None,
            airfoil: None,
        }
    }
}

/// Kind of trailing- or leading-edge device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSurfaceKind {
    Flap,
    Slat,
    Elevator,
}

/// Slotted-flap arrangement, used by the high-lift methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlapConfiguration {
    SingleSlotted,
    DoubleSlotted,
}

/// A deflectable surface on a wing. Deflections are overridden per
/// configuration; the values here are the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSurface {
    pub tag: String,
    pub kind: ControlSurfaceKind,
    pub span_fraction_start: f64,
    pub span_fraction_end: f64,
    pub deflection_rad: f64,
    pub chord_fraction: Option<f64>,
    pub configuration_type: Option<FlapConfiguration>,
}

impl ControlSurface {
    /// Baseline surface of the given kind with everything else unset.
    pub fn new(tag: &str, kind: ControlSurfaceKind) -> Self {
        ControlSurface {
            tag: tag.to_string(),
            kind,
            span_fraction_start: 0.0,
            span_fraction_end: 0.0,
            deflection_rad: 0.0,
            chord_fraction: None,
            configuration_type: None,
        }
    }
}
