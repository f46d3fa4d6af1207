use std::fmt;
use std::fs;
use std::path::Path;

pub mod error;

mod detect;
mod dump;
mod util;
mod xyz;

pub use detect::{detect_file_format, detect_format};
pub use dump::{DumpFrames, count_frames as count_dump_frames};
pub use error::Error;
pub use xyz::{
    PROPERTIES, XyzFrames, count_frames as count_xyz_frames, real, write_converted, write_frame,
};

use crate::model::labels::LabelMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// LAMMPS text dump (`ITEM:` sections per frame).
    Dump,
    /// Plain or extended XYZ (count, comment, atom lines per frame).
    Xyz,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Dump => write!(f, "LAMMPS dump"),
            Format::Xyz => write!(f, "XYZ"),
        }
    }
}

/// Reads a TOML label table (see [`LabelMap::from_toml_str`]).
pub fn read_label_file(path: &Path) -> Result<LabelMap, Error> {
    let text = fs::read_to_string(path)?;
    Ok(LabelMap::from_toml_str(&text)?)
}
