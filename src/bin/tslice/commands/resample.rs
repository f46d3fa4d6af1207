use anyhow::{Context, Result};

use trajslice::{ResampleConfig, resample_file};

use crate::cli::Cli;
use crate::config::build_frame_range;
use crate::display::{Context as DisplayContext, Progress, print_resample_summary};

pub fn run_resample(cli: &Cli, ctx: DisplayContext) -> Result<()> {
    let config = ResampleConfig {
        range: build_frame_range(&cli.selection)?,
    };

    let mut progress = Progress::new(ctx.interactive);
    let report = resample_file(&cli.io.input, &cli.io.output, &config, &mut progress)
        .with_context(|| format!("Resampling of {} failed", cli.io.input.display()))?;
    progress.done();

    if ctx.interactive {
        print_resample_summary(&report, &cli.io.output);
    }

    Ok(())
}
