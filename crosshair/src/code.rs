//! Crosshair code encoding.
//!
//! The game client imports a crosshair as a `;`-delimited token string. Almost
//! every token is a fixed setting (color, outlines, sniper scope); only the
//! center dot and the inner-line geometry come from the drawing:
//!
//! ```text
//! 0;s;1;P;c;5;h;1;o;1;t;1;d;<dot>;z;<dot size>;a;1;f;0;m;0;0b;1;0a;1;
//! 0l;<length>;0o;<offset>;0t;<thickness>;0f;0;0m;0;0s;1;S;c;4;o;1;s;1
//! ```

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;

use std::fmt;

use serde::Serialize;

use crate::consts::{CODE_DELIMITER, CODE_DOT_TRAILER, CODE_LINE_TRAILER, CODE_PREAMBLE, CODE_SUFFIX, DOT_SIZE};
use crate::geometry::{AxisMeasurement, CrosshairGeometry};
use crate::grid::Grid;

/// The values that vary between crosshair codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosshairCode {
    /// Whether the center dot is shown.
    pub center_dot: bool,
    /// Inner-line geometry applied to all four arms.
    pub line: AxisMeasurement,
}

impl CrosshairCode {
    /// Code for an already measured grid, using the averaged line.
    #[must_use]
    pub fn from_geometry(geometry: &CrosshairGeometry) -> Self {
        Self { center_dot: geometry.center_dot, line: geometry.line() }
    }

    /// Center dot size: [`DOT_SIZE`] when the dot is shown, else 0.
    #[must_use]
    pub fn dot_size(&self) -> u8 {
        if self.center_dot { DOT_SIZE } else { 0 }
    }

    /// The code's tokens in order, before joining.
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = CODE_PREAMBLE.iter().map(ToString::to_string).collect();
        tokens.push(format!("d;{}", u8::from(self.center_dot)));
        tokens.push(format!("z;{}", self.dot_size()));
        tokens.extend(CODE_DOT_TRAILER.iter().map(ToString::to_string));
        tokens.push(format!("0l;{}", self.line.length));
        tokens.push(format!("0o;{}", self.line.offset));
        tokens.push(format!("0t;{}", self.line.thickness));
        tokens.extend(CODE_LINE_TRAILER.iter().map(ToString::to_string));
        tokens.push(CODE_SUFFIX.to_owned());
        tokens
    }
}

impl fmt::Display for CrosshairCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().join(CODE_DELIMITER))
    }
}

/// Human-readable per-axis stats, before averaging.
#[must_use]
pub fn summary(geometry: &CrosshairGeometry) -> String {
    format!("H: {} | V: {}", geometry.horizontal, geometry.vertical)
}

/// Result of analysing a grid: what a host displays after every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeReport {
    /// Whether the center cell is drawn.
    pub center_dot: bool,
    /// Raw measurement on the center row.
    pub horizontal: AxisMeasurement,
    /// Raw measurement on the center column.
    pub vertical: AxisMeasurement,
    /// Averaged line written into the code.
    pub line: AxisMeasurement,
    /// The encoded crosshair code.
    pub code: String,
    /// Per-axis stats, see [`summary`].
    pub summary: String,
}

impl CodeReport {
    /// Encode a measured grid.
    #[must_use]
    pub fn from_geometry(geometry: &CrosshairGeometry) -> Self {
        let code = CrosshairCode::from_geometry(geometry);
        Self {
            center_dot: geometry.center_dot,
            horizontal: geometry.horizontal,
            vertical: geometry.vertical,
            line: code.line,
            code: code.to_string(),
            summary: summary(geometry),
        }
    }
}

/// Measure `grid` and encode it. Never fails; an empty grid yields a code
/// with zero length and offset.
#[must_use]
pub fn compute_code(grid: &Grid) -> CodeReport {
    let report = CodeReport::from_geometry(&CrosshairGeometry::measure(grid));
    tracing::debug!(
        length = report.line.length,
        offset = report.line.offset,
        thickness = report.line.thickness,
        center_dot = report.center_dot,
        "computed crosshair code"
    );
    report
}
