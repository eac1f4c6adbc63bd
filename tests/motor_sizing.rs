use electric_fleet_studies::propulsion::motor::{
    fit_speed_constant, sweep_speed_constant, SpeedConstantGrid,
};
use electric_fleet_studies::units;

const BUS_VOLTAGE: f64 = 375.0;
const EFFICIENCY: f64 = 0.95;
const NO_LOAD_CURRENT: f64 = 4.0;

fn design_speed_rad_s() -> f64 {
    units::rpm_to_rad_s(1_300.0)
}

#[test]
fn stock_grid_has_481_inclusive_candidates() {
    let grid = SpeedConstantGrid::default();
    assert_eq!(grid.len(), 481);
    let candidates: Vec<f64> = grid.candidates().collect();
    assert!((candidates[0] - 1.0).abs() < 1e-12);
    assert!((candidates.last().unwrap() - 25.0).abs() < 1e-9);
}

#[test]
fn selects_the_smallest_feasible_candidate() {
    let grid = SpeedConstantGrid::default();
    let fit = fit_speed_constant(
        BUS_VOLTAGE,
        design_speed_rad_s(),
        EFFICIENCY,
        NO_LOAD_CURRENT,
        grid,
    )
    .expect("feasible grid");

    assert!(fit.winding_resistance_ohm > 0.0);

    // Cross-check against the full sweep: the selection is exactly the
    // first feasible sample, and everything below it is infeasible.
    let samples = sweep_speed_constant(
        BUS_VOLTAGE,
        design_speed_rad_s(),
        EFFICIENCY,
        NO_LOAD_CURRENT,
        grid,
    );
    let first_feasible = samples.iter().find(|s| s.feasible).expect("feasible sample");
    assert!(
        (first_feasible.speed_constant_rad_s_per_v - fit.speed_constant_rad_s_per_v).abs() < 1e-12
    );
    assert!((first_feasible.residual_ohm - fit.winding_resistance_ohm).abs() < 1e-12);
    for sample in &samples {
        if sample.speed_constant_rad_s_per_v < fit.speed_constant_rad_s_per_v {
            assert!(!sample.feasible);
        }
    }

    // The feasible window for 375 V at 1 300 rpm opens just above
    // omega over v, near 3.5 rpm per volt.
    let selected_rpm = units::rad_s_to_rpm(fit.speed_constant_rad_s_per_v);
    assert!((selected_rpm - 3.5).abs() < 1e-6, "selected {selected_rpm}");
}

#[test]
fn infeasible_operating_points_return_none() {
    // A one-volt bus can never spin the propeller at 1 300 rpm with the
    // stock candidate range.
    let fit = fit_speed_constant(
        1.0,
        design_speed_rad_s(),
        EFFICIENCY,
        NO_LOAD_CURRENT,
        SpeedConstantGrid::default(),
    );
    assert!(fit.is_none());
}

#[test]
fn degenerate_grids_are_empty() {
    let reversed = SpeedConstantGrid {
        start_rpm_per_v: 25.0,
        end_rpm_per_v: 1.0,
        step_rpm_per_v: 0.05,
    };
    assert!(reversed.is_empty());
    assert!(fit_speed_constant(
        BUS_VOLTAGE,
        design_speed_rad_s(),
        EFFICIENCY,
        NO_LOAD_CURRENT,
        reversed
    )
    .is_none());

    let zero_step = SpeedConstantGrid {
        start_rpm_per_v: 1.0,
        end_rpm_per_v: 25.0,
        step_rpm_per_v: 0.0,
    };
    assert_eq!(zero_step.len(), 0);
}

#[test]
fn refining_the_grid_never_raises_the_selected_candidate() {
    let coarse = SpeedConstantGrid {
        start_rpm_per_v: 1.0,
        end_rpm_per_v: 25.0,
        step_rpm_per_v: 0.25,
    };
    let fine = SpeedConstantGrid::default();
    let coarse_fit = fit_speed_constant(
        BUS_VOLTAGE,
        design_speed_rad_s(),
        EFFICIENCY,
        NO_LOAD_CURRENT,
        coarse,
    )
    .expect("coarse feasible");
    let fine_fit = fit_speed_constant(
        BUS_VOLTAGE,
        design_speed_rad_s(),
        EFFICIENCY,
        NO_LOAD_CURRENT,
        fine,
    )
    .expect("fine feasible");
    assert!(fine_fit.speed_constant_rad_s_per_v <= coarse_fit.speed_constant_rad_s_per_v + 1e-12);
}
