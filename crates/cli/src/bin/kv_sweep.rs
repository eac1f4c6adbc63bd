use std::path::PathBuf;

use clap::Parser;
use electric_fleet_studies::export::{self, kv_sweep};
use electric_fleet_studies::propulsion::motor::{
    fit_speed_constant, sweep_speed_constant, SpeedConstantGrid,
};
use electric_fleet_studies::units;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sweep motor speed-constant candidates and report the selected operating point"
)]
struct Cli {
    /// Bus voltage under load (V)
    #[arg(long, default_value_t = 375.0)]
    voltage: f64,

    /// Propeller design speed (rpm)
    #[arg(long, default_value_t = 1_300.0)]
    rpm: f64,

    /// Target motor efficiency
    #[arg(long, default_value_t = 0.95)]
    efficiency: f64,

    /// No-load current (A)
    #[arg(long, default_value_t = 4.0)]
    no_load_current: f64,

    /// First candidate (rpm per volt)
    #[arg(long, default_value_t = 1.0)]
    start: f64,

    /// Last candidate (rpm per volt)
    #[arg(long, default_value_t = 25.0)]
    end: f64,

    /// Candidate spacing (rpm per volt)
    #[arg(long, default_value_t = 0.05)]
    step: f64,

    /// Write the full sweep as CSV ('-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let grid = SpeedConstantGrid {
        start_rpm_per_v: cli.start,
        end_rpm_per_v: cli.end,
        step_rpm_per_v: cli.step,
    };
    if grid.is_empty() {
        return Err(anyhow::anyhow!("Candidate grid is empty"));
    }

    let angular_velocity = units::rpm_to_rad_s(cli.rpm);
    let samples = sweep_speed_constant(
        cli.voltage,
        angular_velocity,
        cli.efficiency,
        cli.no_load_current,
        grid,
    );
    let feasible = samples.iter().filter(|s| s.feasible).count();

    println!(
        "Swept {} candidates from {} to {} rpm/V ({} feasible)",
        samples.len(),
        cli.start,
        cli.end,
        feasible,
    );

    match fit_speed_constant(
        cli.voltage,
        angular_velocity,
        cli.efficiency,
        cli.no_load_current,
        grid,
    ) {
        Some(fit) => println!(
            "Selected       : kv = {:.4} rad/s/V ({:.2} rpm/V), winding resistance = {:.4} ohm",
            fit.speed_constant_rad_s_per_v,
            units::rad_s_to_rpm(fit.speed_constant_rad_s_per_v),
            fit.winding_resistance_ohm,
        ),
        None => println!("Selected       : no feasible candidate in the grid"),
    }

    if let Some(path) = &cli.output {
        let mut writer = export::writer_for_path(path)?;
        kv_sweep::write_header(&mut writer)?;
        for sample in &samples {
            kv_sweep::write_sample(&mut writer, sample)?;
        }
        if path != &PathBuf::from("-") {
            println!("Sweep written to {}", path.display());
        }
    }

    Ok(())
}
