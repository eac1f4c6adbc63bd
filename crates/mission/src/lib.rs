//! Mission records: flight segments with boundary conditions, solver hints,
//! and per-configuration analysis descriptors.
//!
//! A mission is an ordered list of named segments evaluated by the external
//! sequential-segment solver. Nothing here integrates the equations of
//! motion; the duration and distance figures are closed-form kinematics for
//! reporting.

pub mod airport;
pub mod analyses;
pub mod mission;
pub mod segment;
pub mod solver;
pub mod studies;

pub use airport::{Airport, AtmosphereModel};
pub use analyses::{AerodynamicsSettings, AnalysisSuite, WeightsMethod};
pub use mission::{Mission, MissionError};
pub use segment::{Segment, SegmentKind};
pub use solver::SolverHints;
pub use studies::StudyMission;
