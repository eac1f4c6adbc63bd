use chrono::Local;
use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render an altitude profile from an exported mission segment CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/profile.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

#[derive(Debug, Clone)]
struct Leg {
    altitude_start_m: f64,
    altitude_end_m: f64,
    ground_distance_m: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let legs = read_legs(&cli.input)?;
    if legs.is_empty() {
        return Err(anyhow::anyhow!("No segments in the provided CSV"));
    }

    // Cumulative ground distance builds the x axis.
    let mut points: Vec<(f64, f64)> = Vec::with_capacity(legs.len() + 1);
    let mut distance = 0.0;
    points.push((0.0, legs[0].altitude_start_m));
    for leg in &legs {
        distance += leg.ground_distance_m / 1_000.0;
        points.push((distance, leg.altitude_end_m));
    }

    let max_altitude = points
        .iter()
        .map(|&(_, alt)| alt)
        .fold(f64::NEG_INFINITY, f64::max);
    let x_max = distance.max(1e-3);
    let y_max = (max_altitude * 1.1).max(100.0);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let caption = format!("Mission profile ({})", Local::now().format("%Y-%m-%d"));
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, caption_font)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Ground distance (km)")
        .y_desc("Altitude (m)")
        .label_style(label_font)
        .x_labels(8)
        .y_labels(6)
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(&RGBColor(30, 90, 180)).stroke_width(2),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, RGBColor(30, 90, 180).filled())),
    )?;

    root.present()?;
    println!("Profile written to {}", cli.output.display());
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_legs(path: &str) -> anyhow::Result<Vec<Leg>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let start_idx = column(&headers, "altitude_start_m")?;
    let end_idx = column(&headers, "altitude_end_m")?;
    let distance_idx = column(&headers, "est_ground_distance_m")?;

    let mut legs = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let altitude_start_m: f64 = r.get(start_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let altitude_end_m: f64 = r.get(end_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        let ground_distance_m: f64 = r
            .get(distance_idx)
            .unwrap_or("")
            .parse()
            .unwrap_or(f64::NAN);
        if altitude_start_m.is_finite() && altitude_end_m.is_finite() && ground_distance_m.is_finite()
        {
            legs.push(Leg {
                altitude_start_m,
                altitude_end_m,
                ground_distance_m,
            });
        }
    }
    Ok(legs)
}

fn column(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))
}
