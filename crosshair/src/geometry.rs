//! Line geometry inference along the two center axes.
//!
//! A crosshair drawn on the grid is read back as one [`AxisMeasurement`] per
//! axis: the gap between the center and the first drawn cell, the length of
//! the drawn run beyond that gap, and the stroke thickness where the run
//! starts. Drawings are rarely perfectly symmetric, so each measurement
//! reconciles both directions of its axis: the tighter gap and the longer arm
//! win.
//!
//! All walking along an axis goes through [`scan_outward`]. Distances are
//! counted from the center cell, which itself is never scanned; distance 1 is
//! its immediate neighbor.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::CENTER;
use crate::grid::Grid;

/// One of the two lines through the center cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The center row; positive is rightward.
    Horizontal,
    /// The center column; positive is downward.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];
}

/// Which way to walk from the center along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward index 0 (left, up).
    Negative,
    /// Toward the far edge (right, down).
    Positive,
}

impl Direction {
    /// Both directions, negative first.
    pub const BOTH: [Self; 2] = [Self::Negative, Self::Positive];

    /// Grid index `distance` cells from the center in this direction.
    fn index(self, distance: usize) -> Option<usize> {
        match self {
            Self::Negative => CENTER.checked_sub(distance),
            Self::Positive => CENTER.checked_add(distance),
        }
    }
}

/// Geometry of the crosshair line on one axis.
///
/// `thickness` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisMeasurement {
    /// Drawn cells in the longer arm, starting right after the gap.
    pub length: usize,
    /// Empty cells between the center and the start of the line.
    pub offset: usize,
    /// Drawn cells across the line where it starts.
    pub thickness: usize,
}

impl AxisMeasurement {
    /// Field-wise mean of two measurements, rounded down.
    #[must_use]
    pub fn average(a: Self, b: Self) -> Self {
        Self {
            length: (a.length + b.length) / 2,
            offset: (a.offset + b.offset) / 2,
            thickness: (a.thickness + b.thickness) / 2,
        }
    }
}

impl fmt::Display for AxisMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Len={}, Off={}, Thick={}", self.length, self.offset, self.thickness)
    }
}

/// Cell `distance` steps from the center along `axis`, shifted `across`
/// cells perpendicular to it. `None` off the grid.
fn cell(grid: &Grid, axis: Axis, direction: Direction, distance: usize, across: isize) -> Option<bool> {
    let along = direction.index(distance)?;
    let across = CENTER.checked_add_signed(across)?;
    match axis {
        Axis::Horizontal => grid.get(along, across),
        Axis::Vertical => grid.get(across, along),
    }
}

/// Count consecutive cells along `axis`, starting `start` cells from the
/// center and walking in `direction`, for which `predicate` holds. Stops at
/// the first cell that fails it or at the grid edge.
pub fn scan_outward(
    grid: &Grid,
    axis: Axis,
    direction: Direction,
    start: usize,
    predicate: impl Fn(bool) -> bool,
) -> usize {
    (start..)
        .map_while(|distance| cell(grid, axis, direction, distance, 0))
        .take_while(|&on| predicate(on))
        .count()
}

/// Empty cells between the center and the first drawn cell in `direction`.
/// `None` when that side has nothing drawn before the edge.
fn side_gap(grid: &Grid, axis: Axis, direction: Direction) -> Option<usize> {
    let gap = scan_outward(grid, axis, direction, 1, |on| !on);
    cell(grid, axis, direction, gap + 1, 0).map(|_| gap)
}

/// Infer the line geometry on `axis`.
///
/// The offset is the smaller gap of the two sides that have something
/// drawn (0 if neither has). Length is the longer run of drawn cells from
/// `offset + 1` outward. Thickness counts drawn cells in the three-cell
/// window across the axis at `offset + 1` on the positive side.
#[must_use]
pub fn measure_axis(grid: &Grid, axis: Axis) -> AxisMeasurement {
    let offset = Direction::BOTH
        .into_iter()
        .filter_map(|direction| side_gap(grid, axis, direction))
        .min()
        .unwrap_or(0);

    let start = offset + 1;
    let length = Direction::BOTH
        .into_iter()
        .map(|direction| scan_outward(grid, axis, direction, start, |on| on))
        .max()
        .unwrap_or(0);

    let thickness = (-1..=1)
        .filter(|&across| cell(grid, axis, Direction::Positive, start, across) == Some(true))
        .count()
        .max(1);

    AxisMeasurement { length, offset, thickness }
}

/// Everything read from a grid: the center dot and both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrosshairGeometry {
    /// Whether the center cell is drawn.
    pub center_dot: bool,
    /// Measurement on the center row.
    pub horizontal: AxisMeasurement,
    /// Measurement on the center column.
    pub vertical: AxisMeasurement,
}

impl CrosshairGeometry {
    /// Measure both axes of `grid`.
    #[must_use]
    pub fn measure(grid: &Grid) -> Self {
        let geometry = Self {
            center_dot: grid.center_dot(),
            horizontal: measure_axis(grid, Axis::Horizontal),
            vertical: measure_axis(grid, Axis::Vertical),
        };
        tracing::debug!(
            center_dot = geometry.center_dot,
            horizontal = %geometry.horizontal,
            vertical = %geometry.vertical,
            "measured grid"
        );
        geometry
    }

    /// The measurement for `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> AxisMeasurement {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Single line geometry shared by all four arms: the two axes averaged.
    #[must_use]
    pub fn line(&self) -> AxisMeasurement {
        AxisMeasurement::average(self.horizontal, self.vertical)
    }
}
