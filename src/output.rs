//! Rendering of reports for the terminal.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use clap::ValueEnum;
use serde::Serialize;

use crosshair::{CodeReport, Grid};

use crate::script::ScriptStep;

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Code on the first line, stats on the second.
    #[default]
    Text,
    /// Pretty JSON object; per-step output is one compact object per line.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a CodeReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<Vec<String>>,
}

#[derive(Serialize)]
struct JsonStep<'a> {
    line: usize,
    command: String,
    report: &'a CodeReport,
}

fn grid_rows(grid: &Grid) -> Vec<String> {
    grid.to_string().lines().map(str::to_owned).collect()
}

/// Final report, optionally preceded by the grid it was computed from.
pub fn render(report: &CodeReport, grid: Option<&Grid>, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => {
            let mut out = grid.map(ToString::to_string).unwrap_or_default();
            out.push_str(&report.code);
            out.push_str("\nLine Stats: ");
            out.push_str(&report.summary);
            Ok(out)
        }
        Format::Json => serde_json::to_string_pretty(&JsonReport { report, grid: grid.map(grid_rows) }),
    }
}

/// One line describing the state after a replayed step.
pub fn render_step(step: &ScriptStep, report: &CodeReport, format: Format) -> Result<String, serde_json::Error> {
    match format {
        Format::Text => Ok(format!("{:>4}  {:<14}  {}", step.line, step.command.to_string(), report.summary)),
        Format::Json => serde_json::to_string(&JsonStep {
            line: step.line,
            command: step.command.to_string(),
            report,
        }),
    }
}
