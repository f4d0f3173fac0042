//! Session scripts: a recorded sequence of editor input, one command per line.
//!
//! ```text
//! # three-pixel arm, mirrored
//! symmetry on
//! click 17 15
//! move right
//! move right
//! undo
//! ```
//!
//! `#` starts a comment. Commands are `click X Y`, `undo`, `clear`,
//! `symmetry [on|off]` (bare `symmetry` flips the mode) and
//! `move left|right|up|down`.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::fmt;

use crosshair::{CodeReport, CursorMove, EditorCore, Grid};

/// Error returned by [`parse_script`]. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` is missing {expected}")]
    MissingArgument { line: usize, command: &'static str, expected: &'static str },
    #[error("line {line}: invalid value `{value}`, expected {expected}")]
    InvalidArgument { line: usize, value: String, expected: &'static str },
    #[error("line {line}: unexpected trailing argument `{value}`")]
    TrailingArgument { line: usize, value: String },
}

/// A single editor input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    Click { x: usize, y: usize },
    Undo,
    Clear,
    /// `None` flips the mode; `Some` sets it.
    Symmetry(Option<bool>),
    Move(CursorMove),
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click { x, y } => write!(f, "click {x} {y}"),
            Self::Undo => f.write_str("undo"),
            Self::Clear => f.write_str("clear"),
            Self::Symmetry(None) => f.write_str("symmetry"),
            Self::Symmetry(Some(true)) => f.write_str("symmetry on"),
            Self::Symmetry(Some(false)) => f.write_str("symmetry off"),
            Self::Move(step) => write!(f, "move {}", direction_name(*step)),
        }
    }
}

/// A parsed command and the script line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub command: ScriptCommand,
}

/// Parse a whole script. Blank and comment-only lines are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        steps.push(ScriptStep { line, command: parse_command(line, content)? });
    }
    Ok(steps)
}

fn parse_command(line: usize, content: &str) -> Result<ScriptCommand, ScriptError> {
    let mut words = content.split_whitespace();
    let name = words.next().unwrap_or_default().to_ascii_lowercase();

    let command = match name.as_str() {
        "click" => {
            let x = coordinate(line, words.next(), "an x coordinate")?;
            let y = coordinate(line, words.next(), "a y coordinate")?;
            ScriptCommand::Click { x, y }
        }
        "undo" => ScriptCommand::Undo,
        "clear" => ScriptCommand::Clear,
        "symmetry" => ScriptCommand::Symmetry(match words.next() {
            None => None,
            Some("on") => Some(true),
            Some("off") => Some(false),
            Some(other) => {
                return Err(ScriptError::InvalidArgument {
                    line,
                    value: other.to_owned(),
                    expected: "`on` or `off`",
                });
            }
        }),
        "move" => {
            let word = words.next().ok_or(ScriptError::MissingArgument {
                line,
                command: "move",
                expected: "a direction",
            })?;
            ScriptCommand::Move(parse_direction(word).ok_or_else(|| ScriptError::InvalidArgument {
                line,
                value: word.to_owned(),
                expected: "`left`, `right`, `up` or `down`",
            })?)
        }
        other => return Err(ScriptError::UnknownCommand { line, command: other.to_owned() }),
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::TrailingArgument { line, value: extra.to_owned() });
    }
    Ok(command)
}

fn coordinate(line: usize, word: Option<&str>, expected: &'static str) -> Result<usize, ScriptError> {
    let word = word.ok_or(ScriptError::MissingArgument { line, command: "click", expected })?;
    word.parse().map_err(|_| ScriptError::InvalidArgument {
        line,
        value: word.to_owned(),
        expected,
    })
}

fn parse_direction(word: &str) -> Option<CursorMove> {
    match word.to_ascii_lowercase().as_str() {
        "left" => Some(CursorMove::Left),
        "right" => Some(CursorMove::Right),
        "up" => Some(CursorMove::Up),
        "down" => Some(CursorMove::Down),
        _ => None,
    }
}

fn direction_name(step: CursorMove) -> &'static str {
    match step {
        CursorMove::Left => "left",
        CursorMove::Right => "right",
        CursorMove::Up => "up",
        CursorMove::Down => "down",
    }
}

/// Feed one step to the editor and return the resulting report.
pub fn apply(core: &mut EditorCore, step: &ScriptStep) -> CodeReport {
    match step.command {
        ScriptCommand::Click { x, y } => {
            if !Grid::in_bounds(x, y) {
                tracing::warn!(line = step.line, x, y, "click outside the grid ignored");
            }
            core.on_cell_activated(x, y)
        }
        ScriptCommand::Undo => core.on_undo(),
        ScriptCommand::Clear => core.clear(),
        ScriptCommand::Symmetry(state) => {
            if state.map_or(true, |on| on != core.symmetry) {
                core.toggle_symmetry();
            }
            core.report()
        }
        ScriptCommand::Move(direction) => core.move_cursor(direction),
    }
}
