//! Reader for the line-oriented initial-conditions format.
//!
//! Each data line describes one body:
//!
//! ```text
//! # kind  radius color  mass   x      y  vx  vy
//! Star    30     yellow 1.98e30 0     0  0   0
//! Planet  5      blue   5.97e24 1.49e11 0 0  29800
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Lines with an
//! unknown kind are skipped and reported in [`LoadReport::skipped`].

use crate::{
    body::{Body, BodyKind},
    error::{Error, Result},
};
use glam::DVec2;
use log::{info, warn};
use std::path::{Path, PathBuf};

const FIELDS_PER_LINE: usize = 8;

/// A data line that was ignored because its kind is not recognized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub kind: String,
}

/// Result of reading one initial-conditions file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub bodies: Vec<Body>,
    pub skipped: Vec<SkippedLine>,
}

/// Parses the text of an initial-conditions file.
///
/// ### Errors
/// [`Error::Parse`] for a star/planet line with the wrong number of
/// fields, a field that is not a number, or values that fail
/// [`Body::new`]'s checks.
pub fn parse_system(text: &str) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() || raw.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = raw.split_whitespace().collect();
        let kind = match fields[0].parse::<BodyKind>() {
            Ok(kind) => kind,
            Err(unknown) => {
                warn!("line {line}: unknown space object {:?}, skipping", fields[0]);
                report.skipped.push(SkippedLine {
                    line,
                    kind: unknown,
                });
                continue;
            }
        };

        report.bodies.push(parse_body(kind, &fields, line)?);
    }

    Ok(report)
}

fn parse_body(kind: BodyKind, fields: &[&str], line: usize) -> Result<Body> {
    if fields.len() != FIELDS_PER_LINE {
        return Err(Error::Parse {
            line,
            reason: format!(
                "expected {FIELDS_PER_LINE} fields, found {}",
                fields.len()
            ),
        });
    }

    let num = |i: usize, name: &str| -> Result<f64> {
        fields[i].parse::<f64>().map_err(|e| Error::Parse {
            line,
            reason: format!("{name} {:?}: {e}", fields[i]),
        })
    };

    let radius = num(1, "radius")?;
    let color = fields[2];
    let mass = num(3, "mass")?;
    let pos = DVec2::new(num(4, "x")?, num(5, "y")?);
    let vel = DVec2::new(num(6, "vx")?, num(7, "vy")?);

    Body::new(kind, radius, color, mass, pos, vel).map_err(|e| Error::Parse {
        line,
        reason: e.to_string(),
    })
}

/// Reads and parses an initial-conditions file.
pub fn load_system(path: impl AsRef<Path>) -> Result<LoadReport> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let report = parse_system(&text)?;
    info!(
        "loaded {} bodies from {} ({} lines skipped)",
        report.bodies.len(),
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}

/// Lists the regular files of a directory of initial-condition files,
/// sorted by path.
pub fn list_systems(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}
