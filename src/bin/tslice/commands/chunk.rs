use anyhow::{Context, Result};

use trajslice::{ChunkConfig, chunk_file};

use crate::cli::Cli;
use crate::config::{build_frame_range, chunk_strategy};
use crate::display::{Context as DisplayContext, Progress, print_chunk_summary};

pub fn run_chunk(cli: &Cli, chunks: usize, ctx: DisplayContext) -> Result<()> {
    let config = ChunkConfig {
        range: build_frame_range(&cli.selection)?,
        chunks,
        strategy: chunk_strategy(&cli.chunk),
    };

    let mut progress = Progress::new(ctx.interactive);
    let report = chunk_file(&cli.io.input, &cli.io.output, &config, &mut progress)
        .with_context(|| format!("Chunking of {} failed", cli.io.input.display()))?;
    progress.done();

    if ctx.interactive {
        print_chunk_summary(&report);
    }

    Ok(())
}
