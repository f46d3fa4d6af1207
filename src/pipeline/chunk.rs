use super::{
    ChunkConfig, ChunkFile, ChunkReport, ChunkStrategy, Error, Observer, Stage, create_output,
    open_input, scan_window,
};
use crate::io::{self, XyzFrames, count_xyz_frames, write_frame};
use crate::model::frame::XyzFrame;
use crate::select::{self, ChunkPlan, SelectionWindow};
use log::{debug, info};
use std::borrow::Borrow;
use std::io::{BufRead, Seek, Write};
use std::path::Path;

/// Splits the selected frames of the XYZ file at `input` into
/// `config.chunks` files named after `output_base`.
pub fn chunk_file(
    input: &Path,
    output_base: &Path,
    config: &ChunkConfig,
    observer: &mut dyn Observer,
) -> Result<ChunkReport, Error> {
    chunk(open_input(input)?, output_base, config, observer)
}

/// Stream variant of [`chunk_file`]. No file is created unless the window
/// and chunk count are valid and at least one frame is selected.
pub fn chunk<R: BufRead + Seek>(
    input: R,
    output_base: &Path,
    config: &ChunkConfig,
    observer: &mut dyn Observer,
) -> Result<ChunkReport, Error> {
    if config.chunks == 0 {
        return Err(select::Error::InvalidChunkCount.into());
    }
    match config.strategy {
        ChunkStrategy::Buffered => chunk_buffered(input, output_base, config, observer),
        ChunkStrategy::Streaming => chunk_streaming(input, output_base, config, observer),
    }
}

fn chunk_buffered<R: BufRead>(
    input: R,
    output_base: &Path,
    config: &ChunkConfig,
    observer: &mut dyn Observer,
) -> Result<ChunkReport, Error> {
    observer.begin(Stage::Buffering, 0);
    let mut frames = Vec::new();
    for frame in XyzFrames::new(input) {
        frames.push(frame?);
        observer.advance();
    }
    observer.finish();

    let total_frames = frames.len();
    let window = SelectionWindow::resolve(&config.range, total_frames)?;
    let selected: Vec<&XyzFrame> = window.indices().map(|i| &frames[i]).collect();
    let plan = ChunkPlan::new(selected.len(), config.chunks)?;
    log_plan(total_frames, &window, &plan);

    let chunks = write_chunks(selected.into_iter().map(Ok), &plan, output_base, observer)?;
    Ok(ChunkReport {
        total_frames,
        window,
        chunks,
    })
}

fn chunk_streaming<R: BufRead + Seek>(
    mut input: R,
    output_base: &Path,
    config: &ChunkConfig,
    observer: &mut dyn Observer,
) -> Result<ChunkReport, Error> {
    let (total_frames, window) = scan_window(&mut input, &config.range, |r| count_xyz_frames(r))?;
    let plan = ChunkPlan::new(window.selected_count(), config.chunks)?;
    log_plan(total_frames, &window, &plan);

    let selected = SelectedFrames::new(XyzFrames::new(input), window);
    let chunks = write_chunks(selected, &plan, output_base, observer)?;
    Ok(ChunkReport {
        total_frames,
        window,
        chunks,
    })
}

fn log_plan(total_frames: usize, window: &SelectionWindow, plan: &ChunkPlan) {
    info!(
        "splitting frames {}..={} of {} (stride {}) into {} chunk(s)",
        window.start(),
        window.end(),
        total_frames,
        window.stride(),
        plan.len()
    );
}

/// Writes `frames` in order, `plan.sizes()[k]` of them into chunk `k`.
/// Chunks planned with zero frames are still created.
fn write_chunks<F, I>(
    mut frames: I,
    plan: &ChunkPlan,
    output_base: &Path,
    observer: &mut dyn Observer,
) -> Result<Vec<ChunkFile>, Error>
where
    F: Borrow<XyzFrame>,
    I: Iterator<Item = Result<F, io::Error>>,
{
    let mut written = Vec::with_capacity(plan.len());
    for (ordinal, &size) in plan.sizes().iter().enumerate() {
        let path = plan.path_for(output_base, ordinal);
        let mut writer = create_output(&path)?;

        observer.begin(
            Stage::WritingChunk {
                ordinal,
                of: plan.len(),
            },
            size,
        );
        let mut frame_count = 0;
        for frame in frames.by_ref().take(size) {
            write_frame(&mut writer, frame?.borrow())?;
            frame_count += 1;
            observer.advance();
        }
        writer.flush()?;
        observer.finish();

        debug!("{}: {frame_count} frame(s)", path.display());
        written.push(ChunkFile {
            path,
            frames: frame_count,
        });
    }
    Ok(written)
}

/// Yields only the frames a window selects, skipping the rest without
/// retaining their atom lines.
struct SelectedFrames<R> {
    frames: XyzFrames<R>,
    window: SelectionWindow,
    index: usize,
}

impl<R: BufRead> SelectedFrames<R> {
    fn new(frames: XyzFrames<R>, window: SelectionWindow) -> Self {
        Self {
            frames,
            window,
            index: 0,
        }
    }
}

impl<R: BufRead> Iterator for SelectedFrames<R> {
    type Item = Result<XyzFrame, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index <= self.window.end() {
            let index = self.index;
            self.index += 1;
            if self.window.selects(index) {
                return self.frames.next();
            }
            match self.frames.skip_frame() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }
}
