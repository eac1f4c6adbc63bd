use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn profile_plot_documents_its_inputs() {
    Command::cargo_bin("profile_plot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("altitude profile"))
        .stdout(predicate::str::contains("--input"));
}

#[test]
fn profile_plot_rejects_missing_csv_files() {
    Command::cargo_bin("profile_plot")
        .unwrap()
        .args(["--input", "no/such/segments.csv"])
        .assert()
        .failure();
}
