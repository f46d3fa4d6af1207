use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "tslice",
    about = "Convert LAMMPS dumps to extended XYZ, resample XYZ trajectories, or split them into chunks",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub selection: SelectionOptions,

    #[command(flatten)]
    pub convert: ConvertOptions,

    #[command(flatten)]
    pub chunk: ChunkOptions,
}

#[derive(Args)]
pub struct IoOptions {
    /// Input trajectory (LAMMPS dump or XYZ)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output XYZ file, or the base name for chunk files
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input format (detected from the first line if not specified)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
#[command(next_help_heading = "Frame Selection")]
pub struct SelectionOptions {
    /// First frame to consider (0-based, clamped to the trajectory)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub start: Option<i64>,

    /// Last frame to consider (0-based, inclusive, clamped to the trajectory)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub end: Option<i64>,

    /// Keep every Nth frame of the window
    #[arg(
        long,
        value_name = "N",
        default_value = "1",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sample: u64,
}

/// Options that only apply when converting a LAMMPS dump.
#[derive(Args)]
#[command(next_help_heading = "Dump Conversion")]
pub struct ConvertOptions {
    /// Atom types to keep (e.g. --filter 2 keeps only type 2)
    #[arg(long, value_name = "TYPE", num_args = 1.., allow_hyphen_values = true)]
    pub filter: Option<Vec<i64>>,

    /// Element labels by atom type, replacing the defaults (e.g. 1:C 2:Xe)
    #[arg(long, value_name = "TYPE:LABEL", num_args = 1..)]
    pub labels: Option<Vec<String>>,

    /// Element labels by atom identifier, overriding type labels (e.g. 5:N)
    #[arg(
        long = "index-assignments",
        visible_alias = "ids",
        alias = "index_assignments",
        value_name = "ID:LABEL",
        num_args = 1..
    )]
    pub index_assignments: Option<Vec<String>>,

    /// TOML file with [types] and/or [ids] label tables
    #[arg(long, value_name = "FILE")]
    pub label_file: Option<PathBuf>,
}

/// Options that only apply to XYZ input.
#[derive(Args)]
#[command(next_help_heading = "Chunking")]
pub struct ChunkOptions {
    /// Split the selected frames into N files
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub chunks: Option<i64>,

    /// Stream chunks straight to disk instead of loading every frame first
    #[arg(long)]
    pub streaming_chunks: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// LAMMPS text dump
    #[value(alias = "lammps", alias = "lammpstrj")]
    Dump,
    /// XYZ or extended XYZ
    #[value(alias = "extxyz")]
    Xyz,
}

pub fn parse() -> Cli {
    Cli::parse()
}
