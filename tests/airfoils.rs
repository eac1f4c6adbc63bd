use std::fs;
use std::path::PathBuf;

use electric_fleet_studies::config::airfoil::{load_coordinates, load_polar, missing_files};
use electric_fleet_studies::config::ConfigError;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn selig_coordinate_files_parse_with_a_name_line() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "NACA_4412.txt",
        "NACA 4412\n\
         1.000000  0.001300\n\
         0.500000  0.080000\n\
         0.000000  0.000000\n\
         0.500000 -0.020000\n\
         1.000000 -0.001300\n",
    );

    let coordinates = load_coordinates(&path).unwrap();
    assert_eq!(coordinates.name, "NACA 4412");
    assert_eq!(coordinates.points.len(), 5);
    assert!((coordinates.points[1][1] - 0.08).abs() < 1e-12);
}

#[test]
fn headerless_coordinate_files_fall_back_to_the_file_stem() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "C208a.txt",
        "1.0 0.0\n0.5 0.07\n0.0 0.0\n0.5 -0.04\n1.0 0.0\n",
    );
    let coordinates = load_coordinates(&path).unwrap();
    assert_eq!(coordinates.name, "C208a");
    assert_eq!(coordinates.points.len(), 5);
}

#[test]
fn malformed_coordinate_rows_report_path_and_line() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "broken.txt", "foo\n1.0 0.0\n0.5 bogus\n0.0 0.0\n");
    let err = load_coordinates(&path).unwrap_err();
    match err {
        ConfigError::Airfoil { line, message, .. } => {
            assert_eq!(line, 3);
            assert!(message.contains("bogus"));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn too_few_points_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "short.txt", "1.0 0.0\n0.0 0.0\n");
    assert!(load_coordinates(&path).is_err());
}

#[test]
fn polar_tables_parse_with_reynolds_header() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "NACA_4412_polar_Re_50000.txt",
        "XFOIL polar for NACA 4412\n\
         Re = 0.050 e 6  Ncrit = 9.000\n\
         alpha    CL       CD\n\
         ------- -------- --------\n\
         -2.000  -0.0500  0.01500\n\
          0.000   0.4000  0.01100\n\
          2.000   0.6500  0.01200\n\
          4.000   0.8800  0.01400\n",
    );

    let polar = load_polar(&path).unwrap();
    assert_eq!(polar.points.len(), 4);
    assert!((polar.reynolds_number.unwrap() - 50_000.0).abs() < 1e-6);
    assert!((polar.points[1].cl - 0.4).abs() < 1e-12);
    assert!((polar.points[3].alpha_deg - 4.0).abs() < 1e-12);
}

#[test]
fn polar_without_rows_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty_polar.txt", "just a header\nno numbers here\n");
    assert!(load_polar(&path).is_err());
}

#[test]
fn missing_file_reporting_separates_present_from_absent() {
    let dir = TempDir::new().unwrap();
    let present = write_fixture(&dir, "present.txt", "1.0 0.0\n0.5 0.1\n0.0 0.0\n");
    let absent = dir.path().join("absent.txt");

    let referenced = vec![present.clone(), absent.clone()];
    let missing = missing_files(referenced.iter());
    assert_eq!(missing, vec![absent]);
}

#[test]
fn unreadable_paths_surface_as_io_errors() {
    let err = load_coordinates("no/such/airfoil.txt").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
