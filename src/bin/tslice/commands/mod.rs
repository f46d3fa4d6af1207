mod chunk;
mod convert;
mod resample;

use chunk::run_chunk;
use convert::run_convert;
use resample::run_resample;

use anyhow::Result;

use trajslice::Format;

use crate::cli::{ChunkOptions, Cli, ConvertOptions};
use crate::config::chunk_count;
use crate::display::{Context, print_input_info, print_warning};
use crate::io::resolve_input_format;

pub fn dispatch(cli: Cli, ctx: Context) -> Result<()> {
    let format = resolve_input_format(&cli.io.input, cli.io.format)?;
    if ctx.interactive {
        print_input_info(&cli.io.input, format, cli.io.format.is_none());
    }

    match format {
        Format::Xyz => {
            for flag in dump_only_flags(&cli.convert) {
                print_warning(&format!(
                    "{flag} is only available for LAMMPS dump input; ignoring it"
                ));
            }
            if streaming_without_chunks(&cli.chunk) {
                print_warning("--streaming-chunks has no effect without --chunks; ignoring it");
            }
            match chunk_count(&cli.chunk)? {
                Some(chunks) => run_chunk(&cli, chunks, ctx),
                None => run_resample(&cli, ctx),
            }
        }
        Format::Dump => {
            if cli.chunk.chunks.is_some() || cli.chunk.streaming_chunks {
                print_warning("--chunks is only available for XYZ input; ignoring it");
            }
            run_convert(&cli, ctx)
        }
    }
}

fn dump_only_flags(opts: &ConvertOptions) -> Vec<&'static str> {
    [
        ("--filter", opts.filter.is_some()),
        ("--labels", opts.labels.is_some()),
        ("--index-assignments", opts.index_assignments.is_some()),
        ("--label-file", opts.label_file.is_some()),
    ]
    .into_iter()
    .filter_map(|(flag, given)| given.then_some(flag))
    .collect()
}

fn streaming_without_chunks(opts: &ChunkOptions) -> bool {
    opts.streaming_chunks && opts.chunks.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_given_dump_only_flags() {
        let opts = ConvertOptions {
            filter: Some(vec![1]),
            labels: None,
            index_assignments: Some(vec!["1:N".to_string()]),
            label_file: None,
        };
        assert_eq!(dump_only_flags(&opts), vec!["--filter", "--index-assignments"]);
    }

    #[test]
    fn streaming_flag_alone_is_reported() {
        let alone = ChunkOptions {
            chunks: None,
            streaming_chunks: true,
        };
        assert!(streaming_without_chunks(&alone));

        let with_count = ChunkOptions {
            chunks: Some(3),
            streaming_chunks: true,
        };
        assert!(!streaming_without_chunks(&with_count));
    }
}
