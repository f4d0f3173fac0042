//! Crosshair geometry engine for the SightMaster pixel designer.
//!
//! A user draws a crosshair by toggling cells on a fixed 31×31 grid. This
//! crate owns everything behind the drawing surface: the authoritative grid
//! and its undo history, the inference of line geometry (gap, length,
//! thickness) along the two center axes, and the encoding of that geometry
//! into the crosshair code string consumed by the game client. The host is
//! responsible only for forwarding input events and displaying the resulting
//! [`code::CodeReport`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Collaborator-facing [`engine::EditorCore`] (symmetry, cursor, undo) |
//! | [`grid`] | Pixel grid value type and the undoable [`grid::GridStore`] |
//! | [`geometry`] | Per-axis gap/length/thickness inference |
//! | [`code`] | Crosshair code encoding and the human-readable summary |
//! | [`error`] | Errors raised while parsing textual grids |
//! | [`consts`] | Grid dimension and fixed code tokens |

pub mod code;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;

pub use code::{CodeReport, CrosshairCode, compute_code};
pub use engine::{CursorMove, EditorCore};
pub use error::GridParseError;
pub use geometry::{Axis, AxisMeasurement, CrosshairGeometry, measure_axis};
pub use grid::{Grid, GridStore};
