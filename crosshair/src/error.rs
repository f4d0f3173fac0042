//! Errors for the textual grid format.

use crate::consts::GRID_SIZE;

/// Error returned when parsing a [`Grid`](crate::grid::Grid) from text.
///
/// Rows and columns are reported 1-based to match what a user sees in an
/// editor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// The text did not contain exactly [`GRID_SIZE`] non-empty rows.
    #[error("expected {expected} rows, found {found}", expected = GRID_SIZE)]
    RowCount { found: usize },
    /// A row had the wrong number of cells.
    #[error("row {row}: expected {expected} cells, found {found}", expected = GRID_SIZE)]
    RowLength { row: usize, found: usize },
    /// A cell character is neither an on nor an off marker.
    #[error("row {row}, column {col}: unknown cell character {ch:?}")]
    InvalidCell { row: usize, col: usize, ch: char },
}
