//! The mission aggregate handed to the external sequential-segment solver.

use thiserror::Error;

use fleet_config::StudyOverrides;
use fleet_vehicle::{ConfigurationSet, Vehicle};

use crate::airport::Airport;
use crate::analyses::AnalysisSuite;
use crate::segment::{Segment, SegmentKind};
use crate::solver::SolverHints;

/// Errors raised while assembling or adjusting a mission.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("segment '{segment}' references unknown configuration '{configuration}'")]
    UnknownConfiguration { segment: String, configuration: String },
    #[error("study '{0}' is flown by a different aircraft")]
    WrongAircraft(String),
    #[error("vehicle '{0}' has no battery network to seed the energy override")]
    MissingBattery(String),
}

/// An ordered sequence of flight segments plus the analyses each
/// configuration runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub tag: String,
    pub airport: Airport,
    pub solver: SolverHints,
    pub segments: Vec<Segment>,
    pub analyses: Vec<AnalysisSuite>,
}

impl Mission {
    pub fn append_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segment(&self, tag: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.tag == tag)
    }

    pub fn analyses_for(&self, configuration: &str) -> Option<&AnalysisSuite> {
        self.analyses.iter().find(|a| a.configuration == configuration)
    }

    /// Kinematic end-to-end duration (s).
    pub fn total_duration_s(&self) -> f64 {
        self.segments.iter().map(Segment::duration_s).sum()
    }

    /// Kinematic end-to-end ground distance (m).
    pub fn total_ground_distance_m(&self) -> f64 {
        self.segments.iter().map(Segment::ground_distance_m).sum()
    }

    /// Check that every segment flies in a configuration the set provides.
    pub fn validate_configurations(
        &self,
        configurations: &ConfigurationSet,
    ) -> Result<(), MissionError> {
        for segment in &self.segments {
            if !configurations.contains(&segment.configuration) {
                return Err(MissionError::UnknownConfiguration {
                    segment: segment.tag.clone(),
                    configuration: segment.configuration.clone(),
                });
            }
        }
        Ok(())
    }

    /// Apply study-file overrides to the cruise legs. The battery-energy
    /// fraction needs the vehicle to resolve the pack capacity.
    pub fn apply_overrides(
        &mut self,
        overrides: &StudyOverrides,
        vehicle: &Vehicle,
    ) -> Result<(), MissionError> {
        let battery_energy = match overrides.battery_energy_fraction {
            Some(fraction) => {
                let battery = vehicle
                    .networks
                    .iter()
                    .find_map(|n| n.battery())
                    .ok_or_else(|| MissionError::MissingBattery(vehicle.tag.clone()))?;
                Some(fraction * battery.max_energy_j)
            }
            None => None,
        };

        for segment in &mut self.segments {
            if let SegmentKind::CruiseConstantSpeedConstantAltitude {
                altitude_m,
                air_speed_m_s,
                distance_m,
            } = &mut segment.kind
            {
                if let Some(v) = overrides.cruise_altitude_m {
                    *altitude_m = v;
                }
                if let Some(v) = overrides.cruise_air_speed_m_s {
                    *air_speed_m_s = v;
                }
                if let Some(v) = overrides.cruise_distance_m {
                    *distance_m = v;
                }
                if let Some(v) = overrides.control_points {
                    segment.control_points = v;
                }
                if let Some(energy) = battery_energy {
                    segment.initial_battery_energy_j = Some(energy);
                }
            }
        }
        Ok(())
    }
}
