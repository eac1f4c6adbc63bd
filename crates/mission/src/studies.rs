//! The recorded study missions.
//!
//! Each builder assembles the segment sequence of one study, flown by the
//! matching aircraft from `fleet_aircraft`. Boundary conditions are the
//! study data.

use fleet_core::units::{FOOT, FOOT_PER_MINUTE, KILOMETER, KNOT, NAUTICAL_MILE};
use fleet_vehicle::{ConfigurationSet, Vehicle};

use crate::airport::Airport;
use crate::analyses::{AerodynamicsSettings, AnalysisSuite, WeightsMethod};
use crate::mission::{Mission, MissionError};
use crate::segment::{Segment, SegmentKind};
use crate::solver::SolverHints;

/// The missions recorded by the studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMission {
    CaravanRange,
    CaravanFerry,
    ElectricCaravan,
    ElectricSkyhawk,
    ElectricE190,
}

impl StudyMission {
    pub const ALL: [StudyMission; 5] = [
        StudyMission::CaravanRange,
        StudyMission::CaravanFerry,
        StudyMission::ElectricCaravan,
        StudyMission::ElectricSkyhawk,
        StudyMission::ElectricE190,
    ];

    /// Stable study name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            StudyMission::CaravanRange => "caravan-range",
            StudyMission::CaravanFerry => "caravan-ferry",
            StudyMission::ElectricCaravan => "electric-caravan",
            StudyMission::ElectricSkyhawk => "electric-skyhawk",
            StudyMission::ElectricE190 => "electric-e190",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Name of the aircraft study that flies this mission.
    pub fn aircraft_name(&self) -> &'static str {
        match self {
            StudyMission::CaravanRange | StudyMission::CaravanFerry => "caravan",
            StudyMission::ElectricCaravan => "caravan-electric",
            StudyMission::ElectricSkyhawk => "skyhawk-electric",
            StudyMission::ElectricE190 => "e190-electric",
        }
    }

    /// Assemble the mission for its vehicle and configuration set.
    pub fn build(
        &self,
        vehicle: &Vehicle,
        configurations: &ConfigurationSet,
    ) -> Result<Mission, MissionError> {
        match self {
            StudyMission::CaravanRange => caravan_range(vehicle, configurations),
            StudyMission::CaravanFerry => caravan_ferry(vehicle, configurations),
            StudyMission::ElectricCaravan => electric_caravan(vehicle, configurations),
            StudyMission::ElectricSkyhawk => electric_skyhawk(vehicle, configurations),
            StudyMission::ElectricE190 => electric_e190(vehicle, configurations),
        }
    }
}

fn battery_max_energy(vehicle: &Vehicle) -> Result<(f64, f64), MissionError> {
    vehicle
        .networks
        .iter()
        .find_map(|n| n.battery())
        .map(|battery| (battery.max_energy_j, battery.max_voltage_v))
        .ok_or_else(|| MissionError::MissingBattery(vehicle.tag.clone()))
}

fn finish(mission: Mission, configurations: &ConfigurationSet) -> Result<Mission, MissionError> {
    mission.validate_configurations(configurations)?;
    Ok(mission)
}

/// Baseline Caravan range mission: cruise at 9 000 ft over 200 nmi.
pub fn caravan_range(
    _vehicle: &Vehicle,
    configurations: &ConfigurationSet,
) -> Result<Mission, MissionError> {
    let solver = SolverHints::internal_combustion();
    let analyses = configurations
        .tags()
        .map(|tag| AnalysisSuite {
            weights: WeightsMethod::Transport,
            empty_weight_increment_kg: Some(0.0),
            aerodynamics: AerodynamicsSettings {
                drag_coefficient_increment: 0.0004,
                // Oswald factor for the case considering thrust effect on
                // fuselage drag.
                oswald_efficiency_factor: Some(0.7860),
            },
            energy_network: Some("internal_combustion".to_string()),
            ..AnalysisSuite::base(tag)
        })
        .collect();

    let mut mission = Mission {
        tag: "caravan_range".to_string(),
        airport: Airport::default(),
        solver,
        segments: Vec::new(),
        analyses,
    };

    mission.append_segment(Segment {
        tag: "cruise".to_string(),
        configuration: "cruise".to_string(),
        kind: SegmentKind::CruiseConstantSpeedConstantAltitude {
            altitude_m: 9_000.0 * FOOT,
            air_speed_m_s: 170.0 * KNOT,
            distance_m: 200.0 * NAUTICAL_MILE,
        },
        control_points: 10,
        initial_battery_energy_j: None,
    });

    finish(mission, configurations)
}

/// Caravan ferry mission: cruise at 10 000 ft over 1 200 km.
pub fn caravan_ferry(
    _vehicle: &Vehicle,
    configurations: &ConfigurationSet,
) -> Result<Mission, MissionError> {
    let solver = SolverHints::internal_combustion();
    let analyses = configurations
        .tags()
        .map(|tag| AnalysisSuite {
            weights: WeightsMethod::Uav,
            energy_network: Some("internal_combustion".to_string()),
            ..AnalysisSuite::base(tag)
        })
        .collect();

    let mut mission = Mission {
        tag: "caravan_ferry".to_string(),
        airport: Airport::default(),
        solver,
        segments: Vec::new(),
        analyses,
    };

    mission.append_segment(Segment {
        tag: "cruise".to_string(),
        configuration: "cruise".to_string(),
        kind: SegmentKind::CruiseConstantSpeedConstantAltitude {
            altitude_m: 10_000.0 * FOOT,
            air_speed_m_s: 184.0 * KNOT,
            distance_m: 1_200.0 * KILOMETER,
        },
        control_points: 10,
        initial_battery_energy_j: None,
    });

    finish(mission, configurations)
}

fn battery_analyses(
    configurations: &ConfigurationSet,
    takeoff_drag_increment: f64,
) -> Vec<AnalysisSuite> {
    configurations
        .tags()
        .map(|tag| AnalysisSuite {
            sizing: true,
            weights: WeightsMethod::Transport,
            aerodynamics: AerodynamicsSettings {
                drag_coefficient_increment: if tag == "takeoff" {
                    takeoff_drag_increment
                } else {
                    0.0
                },
                oswald_efficiency_factor: None,
            },
            energy_network: Some("battery_propeller".to_string()),
            ..AnalysisSuite::base(tag)
        })
        .collect()
}

/// Electric Caravan mission: climb to 9 000 ft, cruise 200 nmi starting at
/// 89 % battery energy, descend to sea level.
pub fn electric_caravan(
    vehicle: &Vehicle,
    configurations: &ConfigurationSet,
) -> Result<Mission, MissionError> {
    let (max_energy, max_voltage) = battery_max_energy(vehicle)?;
    let solver = SolverHints::battery_propeller(max_voltage);

    let mut mission = Mission {
        tag: "electric_caravan".to_string(),
        airport: Airport::default(),
        solver,
        segments: Vec::new(),
        analyses: battery_analyses(configurations, 0.1000),
    };

    mission.append_segment(Segment {
        tag: "climb".to_string(),
        configuration: "takeoff".to_string(),
        kind: SegmentKind::ClimbConstantSpeedConstantRate {
            altitude_start_m: 0.0 * FOOT,
            altitude_end_m: 9_000.0 * FOOT,
            air_speed_m_s: 140.0 * KNOT,
            climb_rate_m_s: 800.0 * FOOT_PER_MINUTE,
        },
        control_points: solver.control_points,
        initial_battery_energy_j: None,
    });

    mission.append_segment(Segment {
        tag: "cruise".to_string(),
        configuration: "cruise".to_string(),
        kind: SegmentKind::CruiseConstantSpeedConstantAltitude {
            altitude_m: 9_000.0 * FOOT,
            air_speed_m_s: 170.0 * KNOT,
            distance_m: 200.0 * NAUTICAL_MILE,
        },
        control_points: 10,
        initial_battery_energy_j: Some(max_energy * 0.89),
    });

    mission.append_segment(Segment {
        tag: "descent_1".to_string(),
        configuration: "cruise".to_string(),
        kind: SegmentKind::DescentConstantSpeedConstantRate {
            altitude_start_m: 9_000.0 * FOOT,
            altitude_end_m: 0.0 * FOOT,
            air_speed_m_s: 170.0 * KNOT,
            descent_rate_m_s: 500.0 * FOOT_PER_MINUTE,
        },
        control_points: solver.control_points,
        initial_battery_energy_j: None,
    });

    finish(mission, configurations)
}

/// Electric Skyhawk mission: stepped climb to 3 652 m, metric cruise, and a
/// five-leg staged descent.
pub fn electric_skyhawk(
    vehicle: &Vehicle,
    configurations: &ConfigurationSet,
) -> Result<Mission, MissionError> {
    let (_, max_voltage) = battery_max_energy(vehicle)?;
    let solver = SolverHints::battery_propeller(max_voltage);

    let mut mission = Mission {
        tag: "electric_skyhawk".to_string(),
        airport: Airport::default(),
        solver,
        segments: Vec::new(),
        analyses: battery_analyses(configurations, 0.1000),
    };

    let climbs = [
        ("climb_1", "takeoff", 0.0, 1.0, 36.011, 3.912),
        ("climb_2", "cruise", 1.0, 2.3, 41.156, 3.912),
        ("climb_3", "cruise", 2.3, 3.652, 51.444, 3.912),
    ];
    for (tag, configuration, start_km, end_km, speed, rate) in climbs {
        mission.append_segment(Segment {
            tag: tag.to_string(),
            configuration: configuration.to_string(),
            kind: SegmentKind::ClimbConstantSpeedConstantRate {
                altitude_start_m: start_km * KILOMETER,
                altitude_end_m: end_km * KILOMETER,
                air_speed_m_s: speed,
                climb_rate_m_s: rate,
            },
            control_points: solver.control_points,
            initial_battery_energy_j: None,
        });
    }

    mission.append_segment(Segment {
        tag: "cruise".to_string(),
        configuration: "cruise".to_string(),
        kind: SegmentKind::CruiseConstantSpeedConstantAltitude {
            altitude_m: 3.658 * KILOMETER,
            air_speed_m_s: 61.733,
            distance_m: 1_111.2 * KILOMETER,
        },
        control_points: 10,
        initial_battery_energy_j: None,
    });

    let descents = [
        ("descent_1", "cruise", 3.652, 2.922, 51.444, 2.934),
        ("descent_2", "landing", 2.922, 2.191, 41.156, 3.26),
        ("descent_3", "landing", 2.191, 1.461, 38.583, 3.26),
        ("descent_4", "landing", 1.461, 0.730, 36.011, 3.26),
        ("descent_5", "landing", 0.730, 0.0, 33.439, 1.956),
    ];
    for (tag, configuration, start_km, end_km, speed, rate) in descents {
        mission.append_segment(Segment {
            tag: tag.to_string(),
            configuration: configuration.to_string(),
            kind: SegmentKind::DescentConstantSpeedConstantRate {
                altitude_start_m: start_km * KILOMETER,
                altitude_end_m: end_km * KILOMETER,
                air_speed_m_s: speed,
                descent_rate_m_s: rate,
            },
            control_points: solver.control_points,
            initial_battery_energy_j: None,
        });
    }

    finish(mission, configurations)
}

/// Electric E190 mission: single cruise leg starting at 90 % battery
/// energy.
pub fn electric_e190(
    vehicle: &Vehicle,
    configurations: &ConfigurationSet,
) -> Result<Mission, MissionError> {
    let (max_energy, max_voltage) = battery_max_energy(vehicle)?;
    let solver = SolverHints::battery_propeller(max_voltage);

    let mut mission = Mission {
        tag: "electric_e190".to_string(),
        airport: Airport::default(),
        solver,
        segments: Vec::new(),
        analyses: battery_analyses(configurations, 0.1000),
    };

    mission.append_segment(Segment {
        tag: "cruise".to_string(),
        configuration: "cruise".to_string(),
        kind: SegmentKind::CruiseConstantSpeedConstantAltitude {
            altitude_m: 9_000.0 * FOOT,
            air_speed_m_s: 170.0 * KNOT,
            distance_m: 200.0 * NAUTICAL_MILE,
        },
        control_points: solver.control_points,
        initial_battery_energy_j: Some(max_energy * 0.9),
    });

    finish(mission, configurations)
}
