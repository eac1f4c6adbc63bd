use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn vehicle_lists_the_study_aircraft() {
    Command::cargo_bin("vehicle")
        .unwrap()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("caravan-electric"))
        .stdout(predicate::str::contains("e190-electric"));
}

#[test]
fn vehicle_prints_a_breakdown() {
    Command::cargo_bin("vehicle")
        .unwrap()
        .args(["--aircraft", "caravan-electric"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cessna_208"))
        .stdout(predicate::str::contains("battery_propeller"))
        .stdout(predicate::str::contains("main_wing"));
}

#[test]
fn vehicle_rejects_unknown_studies() {
    Command::cargo_bin("vehicle")
        .unwrap()
        .args(["--aircraft", "concorde"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown aircraft study"));
}

#[test]
fn vehicle_reports_missing_airfoil_files() {
    Command::cargo_bin("vehicle")
        .unwrap()
        .args(["--aircraft", "caravan-electric", "--check-airfoils"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Airfoil files"));
}

#[test]
fn mission_lists_the_study_missions() {
    Command::cargo_bin("mission")
        .unwrap()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("electric-skyhawk"))
        .stdout(predicate::str::contains("caravan-ferry"));
}

#[test]
fn mission_prints_the_segment_table() {
    Command::cargo_bin("mission")
        .unwrap()
        .args(["--mission", "electric-skyhawk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("descent_5"))
        .stdout(predicate::str::contains("Totals"));
}

#[test]
fn mission_exports_a_segment_csv() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("segments.csv");
    Command::cargo_bin("mission")
        .unwrap()
        .args(["--mission", "electric-caravan", "--output"])
        .arg(&output)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("segment,kind,configuration"));
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn mission_applies_override_files() {
    let dir = TempDir::new().unwrap();
    let overrides = dir.path().join("study.toml");
    std::fs::write(&overrides, "cruise_distance_m = 50000.0\n").unwrap();

    Command::cargo_bin("mission")
        .unwrap()
        .args(["--mission", "electric-caravan", "--overrides"])
        .arg(&overrides)
        .assert()
        .success()
        .stdout(predicate::str::contains("cruise"));
}

#[test]
fn kv_sweep_reports_the_selected_operating_point() {
    Command::cargo_bin("kv_sweep")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("481 candidates"))
        .stdout(predicate::str::contains("Selected"));
}

#[test]
fn kv_sweep_writes_the_sweep_csv() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("sweep.csv");
    Command::cargo_bin("kv_sweep")
        .unwrap()
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("kv_rpm_per_v"));
    assert_eq!(csv.lines().count(), 482);
}
