use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};

use trajslice::io::detect_file_format;
use trajslice::Format;

use crate::cli::InputFormat;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// The explicit `--format`, or the format detected from the file's first
/// non-empty line.
pub fn resolve_input_format(path: &Path, explicit: Option<InputFormat>) -> Result<Format> {
    if let Some(format) = explicit {
        return Ok(match format {
            InputFormat::Dump => Format::Dump,
            InputFormat::Xyz => Format::Xyz,
        });
    }
    detect_file_format(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}
