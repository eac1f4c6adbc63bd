use std::path::PathBuf;

use clap::Parser;
use electric_fleet_studies::aircraft::StudyAircraft;
use electric_fleet_studies::config::airfoil;
use electric_fleet_studies::export::{self, summary};
use electric_fleet_studies::units;

#[derive(Parser)]
#[command(author, version, about = "Build a study aircraft and print its breakdown")]
struct Cli {
    /// Aircraft study name (see --list)
    #[arg(long, default_value = "caravan-electric")]
    aircraft: String,

    /// List the available aircraft studies and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Write a JSON summary sidecar ('-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Report referenced airfoil files that are missing on disk
    #[arg(long, default_value_t = false)]
    check_airfoils: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for aircraft in StudyAircraft::ALL {
            println!("{}", aircraft.name());
        }
        return Ok(());
    }

    let aircraft = StudyAircraft::from_name(&cli.aircraft)
        .ok_or_else(|| anyhow::anyhow!("Unknown aircraft study '{}'", cli.aircraft))?;
    let vehicle = aircraft.vehicle()?;
    let configurations = aircraft.configurations(&vehicle)?;

    println!("=== {} ===", vehicle.tag);
    println!(
        "Masses         : MTOW = {:.0} kg, takeoff = {:.0} kg, empty = {}",
        vehicle.mass_properties.max_takeoff_kg,
        vehicle.mass_properties.takeoff_kg,
        vehicle
            .mass_properties
            .operating_empty_kg
            .map(|m| format!("{m:.0} kg"))
            .unwrap_or_else(|| "n/a".to_string()),
    );
    println!(
        "Reference area : {:.2} m², passengers = {}",
        vehicle.reference_area_m2, vehicle.passengers
    );

    println!("Wings:");
    for wing in &vehicle.wings {
        println!(
            "  {:24} span = {:6.2} m, S = {:6.2} m², AR = {:5.2}, MAC = {:.3} m",
            wing.tag, wing.span_m, wing.area_reference_m2, wing.aspect_ratio,
            wing.mean_aerodynamic_chord_m,
        );
    }

    println!("Networks:");
    for network in &vehicle.networks {
        let propeller = network.propeller();
        println!(
            "  {:24} engines = {}, prop tip = {:.2} m at {:.0} rpm",
            network.tag(),
            network.number_of_engines(),
            propeller.tip_radius_m,
            units::rad_s_to_rpm(propeller.angular_velocity_rad_s),
        );
        if let Some(battery) = network.battery() {
            println!(
                "  {:24} battery = {:.0} kg, {:.1} kWh at {:.0} V",
                "",
                battery.mass_kg,
                battery.max_energy_j / 3.6e6,
                battery.max_voltage_v,
            );
        }
    }

    println!(
        "Configurations : {}",
        configurations.tags().collect::<Vec<_>>().join(", ")
    );

    if cli.check_airfoils {
        let referenced: Vec<_> = vehicle
            .networks
            .iter()
            .flat_map(|n| n.propeller().airfoil_files())
            .collect();
        let missing = airfoil::missing_files(referenced.iter().copied());
        if missing.is_empty() {
            println!("Airfoil files  : all {} present", referenced.len());
        } else {
            println!("Airfoil files  : {} missing", missing.len());
            for path in missing {
                println!("  {}", path.display());
            }
        }
    }

    if let Some(path) = &cli.json {
        let mut writer = export::writer_for_path(path)?;
        summary::write_summary(&mut writer, &vehicle)?;
        if path != &PathBuf::from("-") {
            println!("Summary written to {}", path.display());
        }
    }

    Ok(())
}
