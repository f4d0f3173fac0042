//! Editor core: the surface a presentation layer drives.
//!
//! The host translates its raw input (mouse clicks, arrow keys, the undo
//! shortcut, the symmetry key) into calls on [`EditorCore`]. Each call applies
//! at most one edit to the [`GridStore`] and returns a freshly computed
//! [`CodeReport`] for display. Nothing here depends on a windowing toolkit, so
//! the whole editing flow is testable headless.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::code::{CodeReport, compute_code};
use crate::consts::CENTER;
use crate::grid::{Grid, GridStore};

/// One-cell keyboard cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

impl CursorMove {
    /// Column and row delta of this step.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }
}

/// Editing state behind the drawing surface.
///
/// Owns the grid store plus the two pieces of editor state that decide how
/// input becomes edits: whether symmetry mode is on and where the keyboard
/// cursor sits.
#[derive(Debug, Clone)]
pub struct EditorCore {
    pub store: GridStore,
    pub symmetry: bool,
    pub cursor: (usize, usize),
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::with_store(GridStore::new())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Editor over an existing store, cursor on the center cell.
    #[must_use]
    pub fn with_store(store: GridStore) -> Self {
        Self { store, symmetry: false, cursor: (CENTER, CENTER) }
    }

    // --- Input events ---

    /// A cell was clicked. Moves the cursor there and toggles it (mirrored in
    /// symmetry mode). Clicks off the grid change nothing.
    pub fn on_cell_activated(&mut self, x: usize, y: usize) -> CodeReport {
        if Grid::in_bounds(x, y) {
            self.cursor = (x, y);
            self.apply_toggle(x, y);
        } else {
            tracing::debug!(x, y, "activation ignored: out of bounds");
        }
        self.report()
    }

    /// Step the cursor and toggle the cell it lands on. A step that would
    /// leave the grid is ignored.
    pub fn move_cursor(&mut self, step: CursorMove) -> CodeReport {
        let (dx, dy) = step.delta();
        let (x, y) = self.cursor;
        let target = x.checked_add_signed(dx).zip(y.checked_add_signed(dy));
        match target {
            Some((nx, ny)) if Grid::in_bounds(nx, ny) => {
                self.cursor = (nx, ny);
                self.apply_toggle(nx, ny);
            }
            _ => tracing::debug!(?step, x, y, "cursor move ignored: grid edge"),
        }
        self.report()
    }

    /// Revert the last edit, if any.
    pub fn on_undo(&mut self) -> CodeReport {
        if !self.store.undo() {
            tracing::debug!("nothing to undo");
        }
        self.report()
    }

    /// Erase the drawing. Undoable.
    pub fn clear(&mut self) -> CodeReport {
        self.store.clear();
        self.report()
    }

    /// Flip symmetry mode, returning the new state.
    pub fn toggle_symmetry(&mut self) -> bool {
        self.symmetry = !self.symmetry;
        tracing::debug!(symmetry = self.symmetry, "symmetry toggled");
        self.symmetry
    }

    // --- Queries ---

    /// Read-only copy of the grid for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.store.snapshot()
    }

    /// Code and stats for the current grid.
    #[must_use]
    pub fn report(&self) -> CodeReport {
        compute_code(self.store.grid())
    }

    fn apply_toggle(&mut self, x: usize, y: usize) {
        if self.symmetry {
            self.store.toggle_mirrored(x, y);
        } else {
            self.store.toggle(x, y);
        }
    }
}
