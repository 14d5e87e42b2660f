//! Result rendering.

use std::io::{self, Write};

use maze_paths::Path;

/// Notice printed when no path exists.
pub const NO_PATH: &str = "no path found";

/// Line that terminates a printed path.
pub const END_MARKER: &str = ".";

/// Write `path` as text: a `Result:` header after a blank line, one
/// `row col` line per cell, then the end marker.
pub fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Result:")?;
    for p in path.steps() {
        writeln!(out, "{} {}", p.row, p.col)?;
    }
    writeln!(out, "{END_MARKER}")
}

/// Write the search outcome as a single JSON document: the path object, or
/// `null` when unreachable.
pub fn write_json<W: Write>(out: &mut W, path: Option<&Path>) -> serde_json::Result<()> {
    serde_json::to_writer(&mut *out, &path)?;
    writeln!(out).map_err(serde_json::Error::io)
}
