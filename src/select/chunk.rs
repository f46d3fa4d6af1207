use super::error::Error;
use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = "xyz";

/// Frame counts for each output chunk, in file order.
///
/// Chunks get `selected / chunks` frames each; the remainder goes one frame
/// apiece to the earliest chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    sizes: Vec<usize>,
}

impl ChunkPlan {
    pub fn new(selected: usize, chunks: usize) -> Result<Self, Error> {
        if chunks == 0 {
            return Err(Error::InvalidChunkCount);
        }
        if selected == 0 {
            return Err(Error::EmptySelection);
        }

        let per_chunk = selected / chunks;
        let remainder = selected % chunks;
        let sizes = (0..chunks)
            .map(|i| per_chunk + usize::from(i < remainder))
            .collect();
        Ok(Self { sizes })
    }

    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Output path of chunk `ordinal` (zero-based) for `base`.
    pub fn path_for(&self, base: &Path, ordinal: usize) -> PathBuf {
        chunk_path(base, ordinal, self.len())
    }
}

/// `dir/name.ext` becomes `dir/name_chunk_NN.ext`, numbered from 1 and
/// zero-padded to the digit count of `chunks`. A missing extension becomes
/// `.xyz`.
pub fn chunk_path(base: &Path, ordinal: usize, chunks: usize) -> PathBuf {
    let width = chunks.to_string().len();
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let ext = base
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    base.with_file_name(format!("{stem}_chunk_{:0width$}.{ext}", ordinal + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_goes_to_earliest_chunks() {
        assert_eq!(ChunkPlan::new(10, 3).unwrap().sizes(), &[4, 3, 3]);
        assert_eq!(ChunkPlan::new(11, 4).unwrap().sizes(), &[3, 3, 3, 2]);
        assert_eq!(ChunkPlan::new(9, 3).unwrap().sizes(), &[3, 3, 3]);
    }

    #[test]
    fn more_chunks_than_frames_leaves_trailing_chunks_empty() {
        assert_eq!(ChunkPlan::new(2, 4).unwrap().sizes(), &[1, 1, 0, 0]);
    }

    #[test]
    fn sizes_sum_to_selection() {
        for selected in 1..40 {
            for chunks in 1..12 {
                let plan = ChunkPlan::new(selected, chunks).unwrap();
                assert_eq!(plan.len(), chunks);
                assert_eq!(plan.sizes().iter().sum::<usize>(), selected);
            }
        }
    }

    #[test]
    fn rejects_zero_chunks_and_empty_selection() {
        assert_eq!(ChunkPlan::new(5, 0).unwrap_err(), Error::InvalidChunkCount);
        assert_eq!(ChunkPlan::new(0, 3).unwrap_err(), Error::EmptySelection);
    }

    #[test]
    fn pads_ordinal_to_chunk_count_width() {
        assert_eq!(
            chunk_path(Path::new("out/traj.xyz"), 0, 12),
            PathBuf::from("out/traj_chunk_01.xyz")
        );
        assert_eq!(
            chunk_path(Path::new("traj.xyz"), 11, 12),
            PathBuf::from("traj_chunk_12.xyz")
        );
        assert_eq!(chunk_path(Path::new("traj.xyz"), 2, 3), PathBuf::from("traj_chunk_3.xyz"));
    }

    #[test]
    fn defaults_extension_to_xyz() {
        assert_eq!(chunk_path(Path::new("traj"), 0, 2), PathBuf::from("traj_chunk_1.xyz"));
        assert_eq!(
            chunk_path(Path::new("run.extxyz"), 0, 1),
            PathBuf::from("run_chunk_1.extxyz")
        );
    }
}
