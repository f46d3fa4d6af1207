use crate::select::SelectionWindow;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub total_frames: usize,
    pub window: SelectionWindow,
    pub frames_written: usize,
    /// Selected frames skipped for missing sections or columns.
    pub frames_rejected: usize,
    /// Atom rows skipped for being short or non-numeric.
    pub atoms_dropped: usize,
    /// At least one frame lacked an `id` column and used atom types instead.
    pub identifier_fallback: bool,
}

impl ConvertReport {
    pub(crate) fn new(total_frames: usize, window: SelectionWindow) -> Self {
        Self {
            total_frames,
            window,
            frames_written: 0,
            frames_rejected: 0,
            atoms_dropped: 0,
            identifier_fallback: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleReport {
    pub total_frames: usize,
    pub window: SelectionWindow,
    pub frames_written: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    pub path: PathBuf,
    pub frames: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    pub total_frames: usize,
    pub window: SelectionWindow,
    pub chunks: Vec<ChunkFile>,
}

impl ChunkReport {
    pub fn frames_written(&self) -> usize {
        self.chunks.iter().map(|c| c.frames).sum()
    }
}
