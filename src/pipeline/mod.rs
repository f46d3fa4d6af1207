//! Trajectory pipelines: dump→XYZ conversion, XYZ resampling, and XYZ
//! chunking.
//!
//! All three resolve the same [`SelectionWindow`] against the trajectory's
//! frame count before writing anything, so an invalid range aborts cleanly.
//! Conversion and resampling stream the input twice (count, then process);
//! chunking either buffers every frame or streams, see [`ChunkStrategy`].

mod chunk;
mod config;
mod convert;
mod error;
mod report;
mod resample;
mod translate;

pub use chunk::{chunk, chunk_file};
pub use config::{ChunkConfig, ChunkStrategy, ConvertConfig, ResampleConfig};
pub use convert::{convert, convert_file};
pub use error::Error;
pub use report::{ChunkFile, ChunkReport, ConvertReport, ResampleReport};
pub use resample::{resample, resample_file};
pub use translate::FrameTranslator;

use crate::select::{FrameRange, SelectionWindow};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek};
use std::path::Path;

/// What a pipeline is doing when it reports progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Converting,
    Resampling,
    /// Loading every frame before chunking.
    Buffering,
    /// Writing chunk `ordinal` (zero-based) of `of`.
    WritingChunk { ordinal: usize, of: usize },
}

/// Progress hooks called by the pipelines. Every method defaults to a no-op.
///
/// `advance` fires once per frame inside the window, selected or not.
pub trait Observer {
    fn begin(&mut self, _stage: Stage, _total: usize) {}
    fn advance(&mut self) {}
    fn finish(&mut self) {}
}

impl Observer for () {}

/// Counts frames with `count`, resolves the window, and rewinds `reader`
/// for the processing pass.
fn scan_window<R, F>(
    reader: &mut R,
    range: &FrameRange,
    count: F,
) -> Result<(usize, SelectionWindow), Error>
where
    R: BufRead + Seek,
    F: FnOnce(&mut R) -> Result<usize, crate::io::Error>,
{
    let total_frames = count(reader)?;
    let window = SelectionWindow::resolve(range, total_frames)?;
    reader.rewind()?;
    Ok((total_frames, window))
}

fn open_input(path: &Path) -> Result<BufReader<File>, Error> {
    Ok(BufReader::new(File::open(path)?))
}

fn create_output(path: &Path) -> Result<BufWriter<File>, Error> {
    Ok(BufWriter::new(File::create(path)?))
}
