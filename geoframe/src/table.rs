//! Tabular input/output boundary for point batches.
//!
//! The converter consumes spreadsheet-style tables with required columns
//! `X`, `Y`, `Z` (extra columns are ignored) and produces the same layout
//! back. All validation happens here, before the engine runs: a table with
//! missing columns, blank required cells, malformed numbers, or non-finite
//! values fails as a whole rather than skipping rows, so the output row count
//! can never silently diverge from the input.

use crate::errors::{TransformError, TransformResult};
use crate::point::Point3d;
use std::fmt::Write;

const REQUIRED_COLUMNS: [&str; 3] = ["X", "Y", "Z"];

struct ColumnIndices {
    x: usize,
    y: usize,
    z: usize,
}

/// Parses CSV text into an ordered batch of points.
///
/// The first non-empty line is the header; column matching is
/// case-insensitive. Data row indices in errors are 1-based and count data
/// rows, not file lines. Blank lines are skipped.
pub fn parse_points(text: &str) -> TransformResult<Vec<Point3d>> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| TransformError::missing_columns(to_owned_columns(&REQUIRED_COLUMNS)))?;
    let indices = parse_header(header)?;

    let mut points = Vec::new();
    for (row, line) in lines.enumerate() {
        points.push(parse_row(line, row + 1, &indices)?);
    }
    Ok(points)
}

fn parse_header(header: &str) -> TransformResult<ColumnIndices> {
    let fields: Vec<&str> = header.split(',').map(str::trim).collect();
    let find = |name: &str| fields.iter().position(|f| f.eq_ignore_ascii_case(name));

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| find(name).is_none())
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TransformError::missing_columns(missing));
    }

    Ok(ColumnIndices {
        x: find("X").unwrap(),
        y: find("Y").unwrap(),
        z: find("Z").unwrap(),
    })
}

fn parse_row(line: &str, row: usize, indices: &ColumnIndices) -> TransformResult<Point3d> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    let cell = |index: usize| cells.get(index).copied().unwrap_or("");

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip([indices.x, indices.y, indices.z])
        .filter(|(_, index)| cell(*index).is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TransformError::missing_field(row, missing));
    }

    let x = parse_cell(cell(indices.x), row, "X")?;
    let y = parse_cell(cell(indices.y), row, "Y")?;
    let z = parse_cell(cell(indices.z), row, "Z")?;
    Ok(Point3d::new(x, y, z))
}

fn parse_cell(value: &str, row: usize, field: &str) -> TransformResult<f64> {
    let parsed: f64 = value.parse().map_err(|_| {
        TransformError::parse(format!("row {}: invalid {} value '{}'", row, field, value))
    })?;
    if !parsed.is_finite() {
        return Err(TransformError::non_finite(row, field));
    }
    Ok(parsed)
}

fn to_owned_columns(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

/// Renders a batch of points as CSV with an `X,Y,Z` header.
///
/// Coordinates are written with 4 decimal places (0.1 mm); output row `i` is
/// input point `i`.
pub fn render_csv(points: &[Point3d]) -> String {
    let mut out = String::with_capacity(16 + points.len() * 48);
    out.push_str("X,Y,Z\n");
    for p in points {
        // write! to a String cannot fail
        let _ = writeln!(out, "{:.4},{:.4},{:.4}", p.x, p.y, p.z);
    }
    out
}
