//! Command-line front end for the maze solver.
//!
//! Reads a problem description (see [`parse`]), runs
//! [`maze_paths::find_path`] and renders the outcome (see [`format`]).

pub mod cli;
pub mod format;
pub mod parse;

use std::io::{BufRead, Write};

use anyhow::Result;
use log::info;

pub use cli::{Args, OutputFormat};
pub use format::{END_MARKER, NO_PATH};
pub use parse::{Endpoint, ParseError, Problem, parse_problem};

/// Outcome of a successfully parsed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A path was written to the output.
    Found,
    /// No path exists between the endpoints.
    Unreachable,
}

/// Parse a problem from `input`, search it and write the result to `out`.
///
/// Parse failures are returned as errors and nothing is written. An
/// unreachable finish is not an error: text output writes nothing, JSON
/// output writes `null`.
pub fn solve<R: BufRead, W: Write>(input: R, out: &mut W, format: OutputFormat) -> Result<Outcome> {
    let Problem {
        grid,
        start,
        finish,
    } = parse_problem(input)?;
    info!(
        "solving {}x{} grid from {start} to {finish}",
        grid.rows(),
        grid.cols()
    );

    let path = maze_paths::find_path(&grid, start, finish);
    match &path {
        Some(p) => info!("found path of {} cells, cost {}", p.len(), p.cost()),
        None => info!("no path from {start} to {finish}"),
    }

    match format {
        OutputFormat::Text => {
            if let Some(p) = &path {
                format::write_path(out, p)?;
            }
        }
        OutputFormat::Json => format::write_json(out, path.as_ref())?,
    }
    out.flush()?;

    Ok(if path.is_some() {
        Outcome::Found
    } else {
        Outcome::Unreachable
    })
}
