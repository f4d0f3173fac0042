//! Pixel grid: the drawing surface and its undoable store.
//!
//! [`Grid`] is a plain value type holding the on/off state of every cell,
//! indexed `(x, y)` with `x` the column and `y` the row. [`GridStore`] owns the
//! authoritative grid together with a stack of earlier snapshots so that every
//! edit can be reverted.
//!
//! Grids also have a textual form used by hosts and tests: one line per row,
//! `#` for an on cell and `.` for an off cell, with the empty center rendered
//! as `+` as a drawing guide.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::consts::{CENTER, GRID_SIZE};
use crate::error::GridParseError;

/// Square matrix of on/off cells, [`GRID_SIZE`] on each side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// An all-off grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [[false; GRID_SIZE]; GRID_SIZE] }
    }

    /// Build a grid with exactly the given cells turned on. Out-of-bounds
    /// coordinates are skipped.
    #[must_use]
    pub fn with_cells(cells: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut grid = Self::new();
        for (x, y) in cells {
            grid.set(x, y, true);
        }
        grid
    }

    /// Whether `(x, y)` addresses a cell of the grid.
    #[must_use]
    pub const fn in_bounds(x: usize, y: usize) -> bool {
        x < GRID_SIZE && y < GRID_SIZE
    }

    /// Point reflection of `(x, y)` through the center cell, if it lands on
    /// the grid.
    #[must_use]
    pub fn mirror_of(x: usize, y: usize) -> Option<(usize, usize)> {
        let mx = (2 * CENTER).checked_sub(x)?;
        let my = (2 * CENTER).checked_sub(y)?;
        Self::in_bounds(mx, my).then_some((mx, my))
    }

    /// State of the cell at `(x, y)`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Whether the cell at `(x, y)` is on. Cells off the grid read as off.
    #[must_use]
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Set the cell at `(x, y)`. Ignored off the grid.
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = on;
        }
    }

    /// Invert the cell at `(x, y)`. Ignored off the grid.
    pub fn flip(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell ^= true;
        }
    }

    /// Whether the center cell is drawn.
    #[must_use]
    pub fn center_dot(&self) -> bool {
        self.cells[CENTER][CENTER]
    }

    /// Number of on cells.
    #[must_use]
    pub fn count_on(&self) -> usize {
        self.cells.iter().flatten().filter(|&&on| on).count()
    }

    /// Returns `true` if no cell is on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&on| !on)
    }

    /// Coordinates of every on cell in row-major order.
    pub fn on_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(move |(x, _)| (x, y))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("on", &self.on_cells().collect::<Vec<_>>())
            .finish()
    }
}

const ON_MARK: char = '#';
const OFF_MARK: char = '.';
const CENTER_MARK: char = '+';

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                let mark = match (on, x == CENTER && y == CENTER) {
                    (true, _) => ON_MARK,
                    (false, true) => CENTER_MARK,
                    (false, false) => OFF_MARK,
                };
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parse the textual form. Blank lines are skipped; `#`, `X`, `x` and `1`
    /// mark on cells; `.`, `-`, `+` and `0` mark off cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim_end).filter(|line| !line.is_empty()).collect();
        if rows.len() != GRID_SIZE {
            return Err(GridParseError::RowCount { found: rows.len() });
        }

        let mut grid = Self::new();
        for (y, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != GRID_SIZE {
                return Err(GridParseError::RowLength { row: y + 1, found });
            }
            for (x, ch) in line.chars().enumerate() {
                let on = match ch {
                    '#' | 'X' | 'x' | '1' => true,
                    '.' | '-' | '+' | '0' => false,
                    _ => return Err(GridParseError::InvalidCell { row: y + 1, col: x + 1, ch }),
                };
                grid.cells[y][x] = on;
            }
        }
        Ok(grid)
    }
}

/// Authoritative grid plus the snapshots needed to undo edits.
///
/// Every mutation pushes a copy of the grid onto the history before changing
/// it; [`undo`](Self::undo) pops that copy back. Edits addressed off the grid
/// are ignored and leave no history entry.
#[derive(Debug, Clone, Default)]
pub struct GridStore {
    grid: Grid,
    history: VecDeque<Grid>,
    history_limit: Option<usize>,
}

impl GridStore {
    /// Empty grid, unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty grid keeping at most `limit` snapshots. The oldest snapshot is
    /// evicted first; a limit of zero disables undo.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self { history_limit: Some(limit), ..Self::default() }
    }

    /// Flip the cell at `(x, y)`.
    pub fn toggle(&mut self, x: usize, y: usize) {
        if !Grid::in_bounds(x, y) {
            tracing::debug!(x, y, "toggle ignored: out of bounds");
            return;
        }
        self.record();
        self.grid.flip(x, y);
        tracing::debug!(x, y, on = self.grid.is_on(x, y), "toggle");
    }

    /// Flip `(x, y)` and its reflection through the center as one undoable
    /// edit. The center cell is its own reflection and flips once.
    pub fn toggle_mirrored(&mut self, x: usize, y: usize) {
        if !Grid::in_bounds(x, y) {
            tracing::debug!(x, y, "mirrored toggle ignored: out of bounds");
            return;
        }
        self.record();
        self.grid.flip(x, y);
        if let Some((mx, my)) = Grid::mirror_of(x, y) {
            if (mx, my) != (x, y) {
                self.grid.flip(mx, my);
            }
        }
        tracing::debug!(x, y, on = self.grid.is_on(x, y), "toggle_mirrored");
    }

    /// Turn every cell off. Undoable; a no-op on an already empty grid.
    pub fn clear(&mut self) {
        if self.grid.is_empty() {
            return;
        }
        self.record();
        self.grid = Grid::new();
        tracing::debug!("clear");
    }

    /// Restore the grid as it was before the most recent edit. Returns
    /// `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_back() else {
            return false;
        };
        self.grid = previous;
        tracing::debug!(remaining = self.history.len(), "undo");
        true
    }

    /// Copy of the current grid.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    /// Borrow the current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of edits that can currently be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns `true` if there is a snapshot for [`undo`](Self::undo) to restore.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    fn record(&mut self) {
        self.history.push_back(self.grid);
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
                tracing::debug!(limit, "history limit reached, dropped oldest snapshot");
            }
        }
    }
}
