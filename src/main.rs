//! `sightmaster`: command-line host for the crosshair engine.
//!
//! Draw a crosshair as a text grid (or record an editing session as a
//! script) and get back the crosshair code for the game client.

mod output;
mod script;

use std::fs;
use std::io;

use clap::{Args, Parser, Subcommand};
use crosshair::{EditorCore, Grid, GridParseError, GridStore, compute_code};

use crate::output::Format;
use crate::script::ScriptError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid grid in {path}: {source}")]
    Grid { path: String, source: GridParseError },
    #[error("invalid script in {path}: {source}")]
    Script { path: String, source: ScriptError },
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sightmaster", about = "Pixel crosshair designer: draw on a grid, get a crosshair code")]
struct Cli {
    #[arg(long, value_enum, env = "SIGHTMASTER_FORMAT", default_value_t = Format::Text, global = true)]
    format: Format,

    #[arg(short, long, env = "SIGHTMASTER_VERBOSE", global = true, help = "Log editor events to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a grid drawn as text (`#` on, `.` off).
    Code(CodeArgs),
    /// Replay an editing session script and encode the result.
    Replay(ReplayArgs),
    /// Print an empty grid to draw on.
    Template,
}

#[derive(Args, Debug)]
struct CodeArgs {
    #[arg(long, default_value = "-", help = "Grid file path, or - for stdin")]
    input: String,

    #[arg(long, help = "Echo the parsed grid before the code")]
    show_grid: bool,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, default_value = "-", help = "Script file path, or - for stdin")]
    input: String,

    #[arg(long, help = "Start with symmetry mode on")]
    symmetry: bool,

    #[arg(long, env = "SIGHTMASTER_HISTORY_LIMIT", help = "Keep at most this many undo snapshots")]
    history_limit: Option<usize>,

    #[arg(long, help = "Print the stats after every command")]
    steps: bool,

    #[arg(long, help = "Print the final grid before the code")]
    show_grid: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Code(args) => run_code(&args, cli.format),
        Command::Replay(args) => run_replay(&args, cli.format),
        Command::Template => {
            print!("{}", Grid::new());
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &str) -> Result<String, CliError> {
    let result = if path == "-" { io::read_to_string(io::stdin()) } else { fs::read_to_string(path) };
    result.map_err(|source| CliError::Read { path: path.to_owned(), source })
}

fn run_code(args: &CodeArgs, format: Format) -> Result<(), CliError> {
    let text = read_input(&args.input)?;
    let grid: Grid = text.parse().map_err(|source| CliError::Grid { path: args.input.clone(), source })?;
    tracing::info!(on = grid.count_on(), "grid loaded");

    let report = compute_code(&grid);
    println!("{}", output::render(&report, args.show_grid.then_some(&grid), format)?);
    Ok(())
}

fn run_replay(args: &ReplayArgs, format: Format) -> Result<(), CliError> {
    let text = read_input(&args.input)?;
    let steps = script::parse_script(&text).map_err(|source| CliError::Script { path: args.input.clone(), source })?;

    let store = args.history_limit.map_or_else(GridStore::new, GridStore::with_history_limit);
    let mut core = EditorCore::with_store(store);
    core.symmetry = args.symmetry;
    tracing::info!(steps = steps.len(), symmetry = core.symmetry, "replaying session");

    let mut report = core.report();
    for step in &steps {
        report = script::apply(&mut core, step);
        if args.steps {
            println!("{}", output::render_step(step, &report, format)?);
        }
    }

    let grid = core.snapshot();
    println!("{}", output::render(&report, args.show_grid.then_some(&grid), format)?);
    Ok(())
}
