//! Streaming conversion, resampling, and chunking of molecular-dynamics
//! trajectories.
//!
//! The library turns LAMMPS text dumps into extended XYZ with a fixed
//! per-atom schema, and cuts existing XYZ trajectories down by frame window
//! and stride or splits them into evenly sized chunk files.
//!
//! # Features
//!
//! - **Dump conversion**: per-frame column resolution, optional atom-type
//!   filtering, element labels by atom type or by atom identifier, and an
//!   orthogonal `Lattice` derived from the box bounds
//! - **Resampling**: selected XYZ frames are copied byte-for-byte
//! - **Chunking**: the selection is split into `N` files with the remainder
//!   spread over the first chunks, either buffered in memory or streamed
//! - **Shared selection rules**: one clamped `[start, end]` window and stride
//!   used by every pipeline
//!
//! # Quick Start
//!
//! ```
//! use std::io::Cursor;
//! use trajslice::{ConvertConfig, FrameRange, PipelineError, convert};
//!
//! let dump = "\
//! ITEM: TIMESTEP
//! 0
//! ITEM: NUMBER OF ATOMS
//! 2
//! ITEM: BOX BOUNDS pp pp pp
//! 0.0 10.0
//! 0.0 10.0
//! 0.0 10.0
//! ITEM: ATOMS id type x y z
//! 1 1 0.0 0.0 0.0
//! 2 2 1.0 1.0 1.0
//! ";
//!
//! let config = ConvertConfig {
//!     range: FrameRange::with_stride(1),
//!     ..ConvertConfig::default()
//! };
//! let mut out = Vec::new();
//! let report = convert(Cursor::new(dump), &mut out, &config, &mut ())?;
//!
//! assert_eq!(report.frames_written, 1);
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("2\nTimestep=0 Lattice=\"10.0 0.0 0.0"));
//! assert!(text.ends_with("C 0.0 0.0 0.0 1\nXe 1.0 1.0 1.0 2\n"));
//! # Ok::<(), PipelineError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] – Frame readers and writers for both formats, format detection
//! - [`model`] – Frame, atom, label, and lattice types
//! - [`select`] – Frame windows, stride sampling, chunk planning
//! - [`pipeline`] – The convert, resample, and chunk operations

pub mod io;
pub mod model;
pub mod pipeline;
pub mod select;

pub use io::Format;
pub use model::labels::{LabelMap, ParseLabelError, parse_assignment};
pub use select::{ChunkPlan, FrameRange, SelectionWindow};

pub use pipeline::{
    ChunkConfig, ChunkFile, ChunkReport, ChunkStrategy, ConvertConfig, ConvertReport, Observer,
    ResampleConfig, ResampleReport, Stage, chunk, chunk_file, convert, convert_file, resample,
    resample_file,
};

pub use pipeline::Error as PipelineError;
