use super::{Format, error::Error, util::LineReader};
use crate::model::frame::TIMESTEP_MARKER;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Guesses the trajectory format from the first non-empty line.
///
/// A timestep marker means a dump, a non-negative integer means XYZ, and
/// anything else (including an empty stream) falls back to dump.
pub fn detect_format<R: BufRead>(reader: R) -> Result<Format, Error> {
    let mut lines = LineReader::new(reader, Format::Dump);
    while let Some(line) = lines.next_line()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        return Ok(classify(line));
    }
    Ok(Format::Dump)
}

pub fn detect_file_format(path: &Path) -> Result<Format, Error> {
    let file = File::open(path)?;
    detect_format(BufReader::new(file))
}

fn classify(line: &str) -> Format {
    if line.starts_with(TIMESTEP_MARKER) {
        Format::Dump
    } else if line.parse::<u64>().is_ok() {
        Format::Xyz
    } else {
        Format::Dump
    }
}
