//! Text input format.
//!
//! ```text
//! <rows> <cols>
//! <rows lines, each with <cols> whitespace-separated costs>
//! <start_row> <start_col> <finish_row> <finish_col>
//! ```
//!
//! Costs are non-negative integers, 0 marks a wall. Coordinates are
//! 0-indexed and must lie inside the grid.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use maze_core::{Coord, CostGrid, GridError};

/// Which end of the requested path a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Finish => f.write_str("finish"),
        }
    }
}

/// Errors produced while reading a problem description.
///
/// Row numbers are 1-based, counted from the first grid line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed dimensions line: {reason}")]
    MalformedDimensions { reason: &'static str },
    #[error("grid row #{row} is missing")]
    MissingRow { row: usize },
    #[error("grid row #{row} has {found} values, expected {expected}")]
    RowCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid row #{row}: {token:?} is not a cost in 0..={}", u32::MAX)]
    NonNumericCell { row: usize, token: String },
    #[error("malformed start/finish line: {reason}")]
    MalformedEndpoints { reason: &'static str },
    #[error("{which} coordinate ({row}, {col}) lies outside the {rows}x{cols} grid")]
    OutOfBoundsEndpoint {
        which: Endpoint,
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// A validated search request: the grid and both endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub grid: CostGrid,
    pub start: Coord,
    pub finish: Coord,
}

impl FromStr for Problem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_problem(s.as_bytes())
    }
}

/// Read a [`Problem`] from a line source.
///
/// Only the lines the format needs are consumed; anything after the
/// start/finish line is ignored.
pub fn parse_problem<R: BufRead>(reader: R) -> Result<Problem, ParseError> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or(ParseError::MalformedDimensions {
            reason: "input is empty",
        })?;
    let (rows, cols) = parse_dimensions(&header)?;

    // The header is untrusted: grow as rows arrive rather than reserving `rows`.
    let mut cells: Vec<Vec<u32>> = Vec::new();
    for row in 1..=rows {
        let line = lines
            .next()
            .transpose()?
            .ok_or(ParseError::MissingRow { row })?;
        cells.push(parse_row(&line, row, cols)?);
    }
    let grid = CostGrid::from_rows(&cells)?;

    let line = lines
        .next()
        .transpose()?
        .ok_or(ParseError::MalformedEndpoints {
            reason: "line is missing",
        })?;
    let (start, finish) = parse_endpoints(&line)?;

    let locate = |which: Endpoint, (row, col): (i64, i64)| {
        let coord = i32::try_from(row)
            .ok()
            .zip(i32::try_from(col).ok())
            .map(|(r, c)| Coord::new(r, c))
            .filter(|&c| grid.contains(c));
        coord.ok_or(ParseError::OutOfBoundsEndpoint {
            which,
            row,
            col,
            rows,
            cols,
        })
    };
    let start = locate(Endpoint::Start, start)?;
    let finish = locate(Endpoint::Finish, finish)?;

    Ok(Problem {
        grid,
        start,
        finish,
    })
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = fields[..] else {
        return Err(ParseError::MalformedDimensions {
            reason: "expected two numbers",
        });
    };
    let positive = |s: &str| s.parse::<usize>().ok().filter(|&n| n > 0);
    match (positive(rows), positive(cols)) {
        (Some(rows), Some(cols)) => Ok((rows, cols)),
        _ => Err(ParseError::MalformedDimensions {
            reason: "sizes must be positive integers",
        }),
    }
}

fn parse_row(line: &str, row: usize, cols: usize) -> Result<Vec<u32>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != cols {
        return Err(ParseError::RowCountMismatch {
            row,
            expected: cols,
            found: tokens.len(),
        });
    }
    tokens
        .into_iter()
        .map(|t| {
            t.parse::<u32>().map_err(|_| ParseError::NonNumericCell {
                row,
                token: t.to_string(),
            })
        })
        .collect()
}

/// Raw `(row, col)` pairs; bounds are checked once the grid is known.
fn parse_endpoints(line: &str) -> Result<((i64, i64), (i64, i64)), ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [sr, sc, fr, fc] = fields[..] else {
        return Err(ParseError::MalformedEndpoints {
            reason: "expected four numbers",
        });
    };
    let coord = |r: &str, c: &str| Some((r.parse::<i64>().ok()?, c.parse::<i64>().ok()?));
    match (coord(sr, sc), coord(fr, fc)) {
        (Some(start), Some(finish)) => Ok((start, finish)),
        _ => Err(ParseError::MalformedEndpoints {
            reason: "coordinates must be integers",
        }),
    }
}
