use std::fs;

use electric_fleet_studies::aircraft::StudyAircraft;
use electric_fleet_studies::export::{kv_sweep, segments, summary, writer_for_path};
use electric_fleet_studies::mission::StudyMission;
use electric_fleet_studies::propulsion::motor::{sweep_speed_constant, SpeedConstantGrid};
use electric_fleet_studies::units;
use tempfile::TempDir;

fn electric_caravan_mission() -> (
    electric_fleet_studies::mission::Mission,
    electric_fleet_studies::vehicle::Vehicle,
) {
    let aircraft = StudyAircraft::CaravanElectric;
    let vehicle = aircraft.vehicle().unwrap();
    let configurations = aircraft.configurations(&vehicle).unwrap();
    let mission = StudyMission::ElectricCaravan
        .build(&vehicle, &configurations)
        .unwrap();
    (mission, vehicle)
}

#[test]
fn mission_csv_has_a_row_per_segment() {
    let (mission, _) = electric_caravan_mission();
    let mut buffer = Vec::new();
    segments::write_mission(&mut buffer, &mission).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), mission.segments.len() + 1);
    assert!(lines[0].starts_with("segment,kind,configuration,altitude_start_m"));
    assert!(lines[1].starts_with("climb,climb_constant_speed_constant_rate,takeoff"));
    assert!(lines[2].contains("cruise_constant_speed_constant_altitude"));

    // Battery energy column is blank for legs without a reset.
    let climb_fields: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(climb_fields[8], "");
    let cruise_fields: Vec<&str> = lines[2].split(',').collect();
    assert!(!cruise_fields[8].is_empty());
}

#[test]
fn kv_sweep_rows_mark_feasibility() {
    let samples = sweep_speed_constant(
        375.0,
        units::rpm_to_rad_s(1_300.0),
        0.95,
        4.0,
        SpeedConstantGrid::default(),
    );
    let mut buffer = Vec::new();
    kv_sweep::write_header(&mut buffer).unwrap();
    for sample in &samples {
        kv_sweep::write_sample(&mut buffer, sample).unwrap();
    }
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), samples.len() + 1);
    assert_eq!(lines[0], "kv_rpm_per_v,kv_rad_s_per_v,residual_ohm,feasible");
    assert!(lines.iter().skip(1).any(|l| l.ends_with(",true")));
    assert!(lines.iter().skip(1).any(|l| l.ends_with(",false")));
}

#[test]
fn vehicle_summary_is_valid_json() {
    let (_, vehicle) = electric_caravan_mission();
    let mut buffer = Vec::new();
    summary::write_summary(&mut buffer, &vehicle).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("\"tag\": \"Cessna_208\""));
    assert!(text.contains("\"networks\""));
    assert!(text.contains("battery_propeller"));
    // Pretty output starts and ends as one JSON object.
    assert!(text.trim_start().starts_with('{'));
    assert!(text.trim_end().ends_with('}'));
}

#[test]
fn writer_for_path_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("artifacts/run_1/segments.csv");
    {
        let mut writer = writer_for_path(&nested).unwrap();
        segments::write_header(&mut writer).unwrap();
    }
    let written = fs::read_to_string(&nested).unwrap();
    assert!(written.starts_with("segment,kind"));
}
