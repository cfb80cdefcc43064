//! Human-readable conversion report.

use crate::point::Point3d;
use std::fmt::Write;

/// Rows shown in the report preview.
const PREVIEW_ROWS: usize = 5;

/// Renders a plain-text summary of a finished conversion: source and target
/// systems, total row count, and the first five result rows.
///
/// Intended for terminals and log files; the full result belongs in the CSV
/// output, not here.
pub fn conversion_report(from: &str, to: &str, points: &[Point3d]) -> String {
    let mut out = String::new();

    // write! to a String cannot fail
    let _ = writeln!(out, "Coordinate conversion result");
    let _ = writeln!(out, "Source system: {}", from);
    let _ = writeln!(out, "Target system: {}", to);
    let _ = writeln!(out, "Rows converted: {}", points.len());

    if points.is_empty() {
        return out;
    }

    let shown = points.len().min(PREVIEW_ROWS);
    let _ = writeln!(out);
    let _ = writeln!(out, "First {} rows:", shown);
    let _ = writeln!(out, "{:>18} {:>18} {:>18}", "X", "Y", "Z");
    for p in &points[..shown] {
        let _ = writeln!(out, "{:>18.4} {:>18.4} {:>18.4}", p.x, p.y, p.z);
    }
    out
}
