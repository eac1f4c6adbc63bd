//! Flight segments and their boundary conditions.

/// Boundary conditions of one flight phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentKind {
    /// Climb at constant true airspeed and constant rate of climb.
    ClimbConstantSpeedConstantRate {
        altitude_start_m: f64,
        altitude_end_m: f64,
        air_speed_m_s: f64,
        climb_rate_m_s: f64,
    },
    /// Cruise at constant true airspeed and constant altitude over a fixed
    /// ground distance.
    CruiseConstantSpeedConstantAltitude {
        altitude_m: f64,
        air_speed_m_s: f64,
        distance_m: f64,
    },
    /// Descend at constant true airspeed and constant rate of descent.
    DescentConstantSpeedConstantRate {
        altitude_start_m: f64,
        altitude_end_m: f64,
        air_speed_m_s: f64,
        descent_rate_m_s: f64,
    },
}

impl SegmentKind {
    /// Stable name used in exports.
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::ClimbConstantSpeedConstantRate { .. } => "climb_constant_speed_constant_rate",
            SegmentKind::CruiseConstantSpeedConstantAltitude { .. } => {
                "cruise_constant_speed_constant_altitude"
            }
            SegmentKind::DescentConstantSpeedConstantRate { .. } => {
                "descent_constant_speed_constant_rate"
            }
        }
    }
}

/// One named segment of a mission, flown in a specific vehicle
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub tag: String,
    /// Tag of the vehicle configuration whose analyses this segment extends.
    pub configuration: String,
    pub kind: SegmentKind,
    /// Solver discretization points for this segment.
    pub control_points: u32,
    /// Battery energy at the start of the segment, where the study resets
    /// it (J).
    pub initial_battery_energy_j: Option<f64>,
}

impl Segment {
    pub fn altitude_start_m(&self) -> f64 {
        match self.kind {
            SegmentKind::ClimbConstantSpeedConstantRate {
                altitude_start_m, ..
            } => altitude_start_m,
            SegmentKind::CruiseConstantSpeedConstantAltitude { altitude_m, .. } => altitude_m,
            SegmentKind::DescentConstantSpeedConstantRate {
                altitude_start_m, ..
            } => altitude_start_m,
        }
    }

    pub fn altitude_end_m(&self) -> f64 {
        match self.kind {
            SegmentKind::ClimbConstantSpeedConstantRate { altitude_end_m, .. } => altitude_end_m,
            SegmentKind::CruiseConstantSpeedConstantAltitude { altitude_m, .. } => altitude_m,
            SegmentKind::DescentConstantSpeedConstantRate { altitude_end_m, .. } => altitude_end_m,
        }
    }

    pub fn air_speed_m_s(&self) -> f64 {
        match self.kind {
            SegmentKind::ClimbConstantSpeedConstantRate { air_speed_m_s, .. }
            | SegmentKind::CruiseConstantSpeedConstantAltitude { air_speed_m_s, .. }
            | SegmentKind::DescentConstantSpeedConstantRate { air_speed_m_s, .. } => air_speed_m_s,
        }
    }

    /// Commanded vertical rate, positive up (m/s).
    pub fn vertical_rate_m_s(&self) -> f64 {
        match self.kind {
            SegmentKind::ClimbConstantSpeedConstantRate { climb_rate_m_s, .. } => climb_rate_m_s,
            SegmentKind::CruiseConstantSpeedConstantAltitude { .. } => 0.0,
            SegmentKind::DescentConstantSpeedConstantRate {
                descent_rate_m_s, ..
            } => -descent_rate_m_s,
        }
    }

    /// Kinematic duration of the segment.
    pub fn duration_s(&self) -> f64 {
        match self.kind {
            SegmentKind::ClimbConstantSpeedConstantRate {
                altitude_start_m,
                altitude_end_m,
                climb_rate_m_s,
                ..
            } => (altitude_end_m - altitude_start_m).abs() / climb_rate_m_s,
            SegmentKind::CruiseConstantSpeedConstantAltitude {
                air_speed_m_s,
                distance_m,
                ..
            } => distance_m / air_speed_m_s,
            SegmentKind::DescentConstantSpeedConstantRate {
                altitude_start_m,
                altitude_end_m,
                descent_rate_m_s,
                ..
            } => (altitude_start_m - altitude_end_m).abs() / descent_rate_m_s,
        }
    }

    /// Kinematic ground distance covered by the segment, from the
    /// horizontal component of the airspeed.
    pub fn ground_distance_m(&self) -> f64 {
        match self.kind {
            SegmentKind::CruiseConstantSpeedConstantAltitude { distance_m, .. } => distance_m,
            SegmentKind::ClimbConstantSpeedConstantRate {
                air_speed_m_s,
                climb_rate_m_s,
                ..
            } => {
                let horizontal =
                    (air_speed_m_s * air_speed_m_s - climb_rate_m_s * climb_rate_m_s).max(0.0);
                horizontal.sqrt() * self.duration_s()
            }
            SegmentKind::DescentConstantSpeedConstantRate {
                air_speed_m_s,
                descent_rate_m_s,
                ..
            } => {
                let horizontal = (air_speed_m_s * air_speed_m_s
                    - descent_rate_m_s * descent_rate_m_s)
                    .max(0.0);
                horizontal.sqrt() * self.duration_s()
            }
        }
    }
}
