use crate::model::labels::LabelMap;
use crate::select::FrameRange;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub range: FrameRange,
    /// Atom types to keep; `None` keeps every atom.
    pub filter: Option<HashSet<i64>>,
    pub labels: LabelMap,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            range: FrameRange::default(),
            filter: None,
            labels: LabelMap::with_default_types(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResampleConfig {
    pub range: FrameRange,
}

#[derive(Debug, Clone)]
pub struct ChunkConfig {
    pub range: FrameRange,
    pub chunks: usize,
    pub strategy: ChunkStrategy,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            range: FrameRange::default(),
            chunks: 1,
            strategy: ChunkStrategy::default(),
        }
    }
}

/// How the chunk pipeline reads its input. Both produce identical files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkStrategy {
    /// Hold every frame in memory, then split.
    #[default]
    Buffered,
    /// Count frames first, then stream each chunk straight to disk.
    Streaming,
}
