use std::path::PathBuf;

use clap::Parser;
use electric_fleet_studies::aircraft::StudyAircraft;
use electric_fleet_studies::config::study::load_study;
use electric_fleet_studies::export::{self, segments};
use electric_fleet_studies::mission::StudyMission;

#[derive(Parser)]
#[command(author, version, about = "Assemble a study mission and print its segment table")]
struct Cli {
    /// Mission study name (see --list)
    #[arg(long, default_value = "electric-caravan")]
    mission: String,

    /// List the available mission studies and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Study override file (YAML or TOML) adjusting the cruise legs
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Write the segment table as CSV ('-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for mission in StudyMission::ALL {
            println!("{:18} flown by {}", mission.name(), mission.aircraft_name());
        }
        return Ok(());
    }

    let study = StudyMission::from_name(&cli.mission)
        .ok_or_else(|| anyhow::anyhow!("Unknown mission study '{}'", cli.mission))?;
    let aircraft = StudyAircraft::from_name(study.aircraft_name())
        .ok_or_else(|| anyhow::anyhow!("Unknown aircraft study '{}'", study.aircraft_name()))?;

    let vehicle = aircraft.vehicle()?;
    let configurations = aircraft.configurations(&vehicle)?;
    let mut mission = study.build(&vehicle, &configurations)?;

    if let Some(path) = &cli.overrides {
        let overrides = load_study(path)?;
        mission.apply_overrides(&overrides, &vehicle)?;
    }

    println!("=== {} ({}) ===", mission.tag, vehicle.tag);
    println!(
        "{:12} {:40} {:>10} {:>10} {:>9} {:>9}",
        "segment", "kind", "alt start", "alt end", "speed", "duration"
    );
    for segment in &mission.segments {
        println!(
            "{:12} {:40} {:>8.0} m {:>8.0} m {:>5.1} m/s {:>8.0} s",
            segment.tag,
            segment.kind.name(),
            segment.altitude_start_m(),
            segment.altitude_end_m(),
            segment.air_speed_m_s(),
            segment.duration_s(),
        );
    }
    println!(
        "Totals         : {:.1} min, {:.1} km ground distance",
        mission.total_duration_s() / 60.0,
        mission.total_ground_distance_m() / 1_000.0,
    );

    if let Some(path) = &cli.output {
        let mut writer = export::writer_for_path(path)?;
        segments::write_mission(&mut writer, &mission)?;
        if path != &PathBuf::from("-") {
            println!("Segment table written to {}", path.display());
        }
    }

    Ok(())
}
