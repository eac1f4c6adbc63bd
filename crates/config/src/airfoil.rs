//! Plain-text airfoil files referenced by the propeller and wing records.
//!
//! Coordinate files are Selig-style: an optional name line followed by
//! whitespace-separated x/y pairs running around the section. Polar files
//! are the tabulated XFOIL export: free-form header lines, then an
//! alpha/CL/CD table.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Section geometry loaded from a coordinate file.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilCoordinates {
    /// Section name from the header line, or the file stem.
    pub name: String,
    /// x/y pairs in chord fractions.
    pub points: Vec<[f64; 2]>,
}

/// One row of a polar table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub alpha_deg: f64,
    pub cl: f64,
    pub cd: f64,
}

/// Section polar loaded from a tabulated file.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilPolar {
    /// Reynolds number parsed from the header, when present.
    pub reynolds_number: Option<f64>,
    pub points: Vec<PolarPoint>,
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a Selig-style coordinate file.
pub fn load_coordinates<P: AsRef<Path>>(path: P) -> Result<AirfoilCoordinates, ConfigError> {
    let path = path.as_ref();
    let contents = read_file(path)?;

    let mut name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut points = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            // A single token leading the file is the section name.
            if points.is_empty() {
                name = line.to_string();
                continue;
            }
            return Err(ConfigError::Airfoil {
                path: path.to_path_buf(),
                line: index + 1,
                message: format!("expected an x/y pair, found '{line}'"),
            });
        };
        match (x.parse::<f64>(), y.parse::<f64>()) {
            (Ok(x), Ok(y)) => points.push([x, y]),
            _ if points.is_empty() => {
                // Non-numeric header line.
                name = line.to_string();
            }
            _ => {
                return Err(ConfigError::Airfoil {
                    path: path.to_path_buf(),
                    line: index + 1,
                    message: format!("expected an x/y pair, found '{line}'"),
                });
            }
        }
    }

    if points.len() < 3 {
        return Err(ConfigError::Airfoil {
            path: path.to_path_buf(),
            line: contents.lines().count(),
            message: format!("only {} coordinate pairs in file", points.len()),
        });
    }

    Ok(AirfoilCoordinates { name, points })
}

/// Load a tabulated polar file.
pub fn load_polar<P: AsRef<Path>>(path: P) -> Result<AirfoilPolar, ConfigError> {
    let path = path.as_ref();
    let contents = read_file(path)?;

    let mut reynolds_number = None;
    let mut points = Vec::new();

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let numeric: Vec<f64> = fields
            .iter()
            .map_while(|f| f.parse::<f64>().ok())
            .collect();
        if numeric.len() >= 3 && numeric.len() == fields.len() {
            points.push(PolarPoint {
                alpha_deg: numeric[0],
                cl: numeric[1],
                cd: numeric[2],
            });
        } else if reynolds_number.is_none() {
            reynolds_number = parse_reynolds(line);
        }
    }

    if points.is_empty() {
        return Err(ConfigError::Airfoil {
            path: path.to_path_buf(),
            line: contents.lines().count(),
            message: "no alpha/CL/CD rows in file".to_string(),
        });
    }

    Ok(AirfoilPolar {
        reynolds_number,
        points,
    })
}

/// Pull a Reynolds number out of a header line such as
/// `Re = 0.050 e 6` or `Reynolds number: 50000`.
fn parse_reynolds(line: &str) -> Option<f64> {
    let lower = line.to_ascii_lowercase();
    let position = lower.find("re")?;
    let tail = &line[position + 2..];
    let cleaned: String = tail
        .chars()
        .map(|c| {
            if c.is_ascii_digit() || c == '.' || c == 'e' || c == 'E' || c == '+' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let mut tokens = cleaned.split_whitespace();
    let mantissa = tokens.by_ref().find_map(|t| t.parse::<f64>().ok())?;
    // XFOIL prints "Re = 0.050 e 6" with the exponent detached.
    match tokens.next() {
        Some(token) if token.eq_ignore_ascii_case("e") => {
            if let Some(exponent) = tokens.next().and_then(|t| t.parse::<i32>().ok()) {
                return Some(mantissa * 10f64.powi(exponent));
            }
        }
        Some(token) => {
            if let Some(exponent) = token
                .strip_prefix(['e', 'E'])
                .and_then(|t| t.parse::<i32>().ok())
            {
                return Some(mantissa * 10f64.powi(exponent));
            }
        }
        None => {}
    }
    Some(mantissa)
}

/// Of the given referenced files, the ones that do not exist on disk.
pub fn missing_files<'a, I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    paths
        .into_iter()
        .filter(|p| !p.exists())
        .cloned()
        .collect()
}
