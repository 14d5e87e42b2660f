//! `maze` — print the cheapest path through a weighted maze.
//!
//! Run: cargo run --bin maze < maze.txt

use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use maze_cli::{Args, NO_PATH, Outcome, solve};

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::Unreachable) => {
            eprintln!("{NO_PATH}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Outcome> {
    let mut out = io::stdout().lock();
    match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            solve(BufReader::new(file), &mut out, args.format)
        }
        None => solve(io::stdin().lock(), &mut out, args.format),
    }
}
