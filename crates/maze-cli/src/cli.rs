use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How a found path is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `row col` line per cell, followed by a `.` line.
    #[default]
    Text,
    /// A single JSON object with `steps` and `cost`.
    Json,
}

/// Find the cheapest path through a weighted maze.
///
/// The maze is read from stdin (or --input): a `rows cols` line, the grid
/// rows, then `start_row start_col finish_row finish_col`. Cell values are
/// entering costs and 0 is a wall.
#[derive(Debug, Parser)]
#[command(name = "maze", version, about)]
pub struct Args {
    /// Read the maze from this file instead of stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the `-v` count. `RUST_LOG` may still override it.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
