//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by
/// convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod segments {
    use std::io::{self, Write};

    use fleet_mission::{Mission, Segment};

    const HEADER: &str = "segment,kind,configuration,altitude_start_m,altitude_end_m,air_speed_m_s,vertical_rate_m_s,control_points,battery_energy_j,est_duration_s,est_ground_distance_m";

    /// Write the standard mission-segment CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Write one segment row, matching the standard header ordering.
    pub fn write_segment(writer: &mut dyn Write, segment: &Segment) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{},{:.3},{:.3},{:.4},{:.4},{},{},{:.1},{:.1}",
            segment.tag,
            segment.kind.name(),
            segment.configuration,
            segment.altitude_start_m(),
            segment.altitude_end_m(),
            segment.air_speed_m_s(),
            segment.vertical_rate_m_s(),
            segment.control_points,
            segment
                .initial_battery_energy_j
                .map(|e| format!("{e:.0}"))
                .unwrap_or_default(),
            segment.duration_s(),
            segment.ground_distance_m(),
        )
    }

    /// Write the full mission segment table.
    pub fn write_mission(writer: &mut dyn Write, mission: &Mission) -> io::Result<()> {
        write_header(writer)?;
        for segment in &mission.segments {
            write_segment(writer, segment)?;
        }
        Ok(())
    }
}

pub mod kv_sweep {
    use std::io::{self, Write};

    use fleet_propulsion::SpeedConstantSample;

    const HEADER: &str = "kv_rpm_per_v,kv_rad_s_per_v,residual_ohm,feasible";

    /// Write the standard speed-constant sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Write one sweep sample, matching the standard header ordering.
    pub fn write_sample(writer: &mut dyn Write, sample: &SpeedConstantSample) -> io::Result<()> {
        writeln!(
            writer,
            "{:.2},{:.6},{:.6},{}",
            sample.speed_constant_rpm_per_v,
            sample.speed_constant_rad_s_per_v,
            sample.residual_ohm,
            if sample.feasible { "true" } else { "false" },
        )
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    use fleet_vehicle::Vehicle;

    /// One wing row of the vehicle summary sidecar.
    #[derive(Debug, Serialize)]
    pub struct WingSummary {
        pub tag: String,
        pub span_m: f64,
        pub area_reference_m2: f64,
        pub aspect_ratio: f64,
        pub mean_aerodynamic_chord_m: f64,
        pub taper: f64,
    }

    /// One network row of the vehicle summary sidecar.
    #[derive(Debug, Serialize)]
    pub struct NetworkSummary {
        pub tag: &'static str,
        pub number_of_engines: u32,
        pub battery_energy_j: Option<f64>,
        pub motor_speed_constant_rad_s_per_v: Option<f64>,
        pub propeller_tip_radius_m: f64,
    }

    /// JSON sidecar describing one built vehicle.
    #[derive(Debug, Serialize)]
    pub struct VehicleSummary {
        pub tag: String,
        pub passengers: u32,
        pub reference_area_m2: f64,
        pub max_takeoff_kg: f64,
        pub takeoff_kg: f64,
        pub operating_empty_kg: Option<f64>,
        pub wings: Vec<WingSummary>,
        pub networks: Vec<NetworkSummary>,
    }

    impl VehicleSummary {
        pub fn from_vehicle(vehicle: &Vehicle) -> Self {
            VehicleSummary {
                tag: vehicle.tag.clone(),
                passengers: vehicle.passengers,
                reference_area_m2: vehicle.reference_area_m2,
                max_takeoff_kg: vehicle.mass_properties.max_takeoff_kg,
                takeoff_kg: vehicle.mass_properties.takeoff_kg,
                operating_empty_kg: vehicle.mass_properties.operating_empty_kg,
                wings: vehicle
                    .wings
                    .iter()
                    .map(|wing| WingSummary {
                        tag: wing.tag.clone(),
                        span_m: wing.span_m,
                        area_reference_m2: wing.area_reference_m2,
                        aspect_ratio: wing.aspect_ratio,
                        mean_aerodynamic_chord_m: wing.mean_aerodynamic_chord_m,
                        taper: wing.taper,
                    })
                    .collect(),
                networks: vehicle
                    .networks
                    .iter()
                    .map(|network| NetworkSummary {
                        tag: network.tag(),
                        number_of_engines: network.number_of_engines(),
                        battery_energy_j: network.battery().map(|b| b.max_energy_j),
                        motor_speed_constant_rad_s_per_v: network
                            .motor()
                            .map(|m| m.speed_constant_rad_s_per_v),
                        propeller_tip_radius_m: network.propeller().tip_radius_m,
                    })
                    .collect(),
            }
        }
    }

    /// Serialize the vehicle summary as pretty JSON.
    pub fn write_summary(writer: &mut dyn Write, vehicle: &Vehicle) -> io::Result<()> {
        let summary = VehicleSummary::from_vehicle(vehicle);
        to_writer_pretty(writer, &summary)?;
        Ok(())
    }
}
