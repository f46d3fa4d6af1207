use std::collections::HashSet;

use anyhow::{Context, Result};

use trajslice::{ConvertConfig, convert_file};

use crate::cli::Cli;
use crate::config::{build_frame_range, build_label_map};
use crate::display::{Context as DisplayContext, Progress, print_convert_summary, print_warning};

pub fn run_convert(cli: &Cli, ctx: DisplayContext) -> Result<()> {
    let config = ConvertConfig {
        range: build_frame_range(&cli.selection)?,
        filter: cli
            .convert
            .filter
            .as_ref()
            .map(|types| types.iter().copied().collect::<HashSet<_>>()),
        labels: build_label_map(&cli.convert)?,
    };

    let mut progress = Progress::new(ctx.interactive);
    let report = convert_file(&cli.io.input, &cli.io.output, &config, &mut progress)
        .with_context(|| format!("Conversion of {} failed", cli.io.input.display()))?;
    progress.done();

    if report.identifier_fallback {
        print_warning("no 'id' column found; atom types were written as identifiers");
    }
    if ctx.interactive {
        print_convert_summary(&report, &cli.io.output);
    }

    Ok(())
}
