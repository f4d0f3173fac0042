//! Shared constants for the crosshair crate.

// ── Grid ────────────────────────────────────────────────────────

/// Width and height of the drawing grid. Must stay odd so a single center
/// cell exists.
pub const GRID_SIZE: usize = 31;

/// Row and column index of the center cell.
pub const CENTER: usize = GRID_SIZE / 2;

const _: () = assert!(GRID_SIZE % 2 == 1, "grid size must be odd");

// ── Code ────────────────────────────────────────────────────────

/// Separator between tokens in the crosshair code.
pub const CODE_DELIMITER: &str = ";";

/// Dot size written when the center dot is drawn.
pub const DOT_SIZE: u8 = 3;

/// Tokens preceding the center-dot fields: profile header, color and
/// outline settings.
pub const CODE_PREAMBLE: [&str; 7] = ["0", "s;1", "P", "c;5", "h;1", "o;1", "t;1"];

/// Fixed tokens between the dot fields and the inner-line geometry:
/// dot opacity, firing error, movement error, then inner-line enabled and
/// inner-line opacity.
pub const CODE_DOT_TRAILER: [&str; 5] = ["a;1", "f;0", "m;0", "0b;1", "0a;1"];

/// Fixed inner-line flags following the geometry tokens.
pub const CODE_LINE_TRAILER: [&str; 3] = ["0f;0", "0m;0", "0s;1"];

/// Sniper-scope block that closes every code.
pub const CODE_SUFFIX: &str = "S;c;4;o;1;s;1";
