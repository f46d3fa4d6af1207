mod labels;

pub use labels::build_label_map;

use anyhow::{Result, bail};

use trajslice::{ChunkStrategy, FrameRange};

use crate::cli::{ChunkOptions, SelectionOptions};

pub fn build_frame_range(opts: &SelectionOptions) -> Result<FrameRange> {
    let Ok(stride) = usize::try_from(opts.sample) else {
        bail!("Sample rate {} is too large", opts.sample);
    };
    Ok(FrameRange::new(opts.start, opts.end, stride))
}

/// The requested chunk count, if any. Zero and negative counts are rejected.
pub fn chunk_count(opts: &ChunkOptions) -> Result<Option<usize>> {
    match opts.chunks {
        None => Ok(None),
        Some(n) if n <= 0 => bail!("Number of chunks must be greater than 0 (got {n})"),
        Some(n) => match usize::try_from(n) {
            Ok(n) => Ok(Some(n)),
            Err(_) => bail!("Number of chunks {n} is too large"),
        },
    }
}

pub fn chunk_strategy(opts: &ChunkOptions) -> ChunkStrategy {
    if opts.streaming_chunks {
        ChunkStrategy::Streaming
    } else {
        ChunkStrategy::Buffered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(n: Option<i64>) -> ChunkOptions {
        ChunkOptions {
            chunks: n,
            streaming_chunks: false,
        }
    }

    #[test]
    fn chunk_count_rejects_non_positive() {
        assert!(chunk_count(&chunks(Some(0))).is_err());
        assert!(chunk_count(&chunks(Some(-2))).is_err());
        assert_eq!(chunk_count(&chunks(Some(3))).unwrap(), Some(3));
        assert_eq!(chunk_count(&chunks(None)).unwrap(), None);
    }

    #[test]
    fn frame_range_carries_bounds_and_stride() {
        let opts = SelectionOptions {
            start: Some(-1),
            end: Some(40),
            sample: 5,
        };
        assert_eq!(
            build_frame_range(&opts).unwrap(),
            FrameRange::new(Some(-1), Some(40), 5)
        );
    }
}
