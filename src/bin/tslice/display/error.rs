use std::io::{self, Write};

use anyhow::Error;

use trajslice::io::Error as IoError;
use trajslice::select::Error as SelectError;
use trajslice::{ParseLabelError, PipelineError};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = collect_hints(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();

    if let Some(pipeline_err) = err.downcast_ref::<PipelineError>() {
        match pipeline_err {
            PipelineError::Selection(e) => selection_hints(e, &mut hints),
            PipelineError::Io(e) => io_hints(e, &mut hints),
        }
    } else if let Some(io_err) = err.downcast_ref::<IoError>() {
        io_hints(io_err, &mut hints);
    } else if err.downcast_ref::<ParseLabelError>().is_some() {
        hints.push("Label pairs are written KEY:LABEL, e.g. --labels 1:C 2:Xe".into());
        hints.push("Keys are integer atom types (--labels) or atom ids (--index-assignments)".into());
    } else {
        fallback_hints(err, &mut hints);
    }

    hints
}

fn selection_hints(err: &SelectError, hints: &mut Vec<String>) {
    match err {
        SelectError::InvalidWindow { end, .. } if *end < 0 => {
            hints.push("The input contains no complete frames".into());
            hints.push("Check that the correct format was detected, or pass --format".into());
        }
        SelectError::InvalidWindow { start, end } => {
            hints.push(format!(
                "After clamping, --start ({start}) lies past --end ({end})"
            ));
            hints.push("Frame indices are 0-based and --end is inclusive".into());
        }
        SelectError::InvalidStride => {
            hints.push("--sample must be at least 1".into());
        }
        SelectError::InvalidChunkCount => {
            hints.push("--chunks must be at least 1".into());
        }
        SelectError::EmptySelection => {
            hints.push("No frames fall inside the requested window".into());
            hints.push("Widen --start/--end or lower --sample".into());
        }
    }
}

fn io_hints(err: &IoError, hints: &mut Vec<String>) {
    match err {
        IoError::Io { source } => std_io_hints(source, hints),
        IoError::Parse { format, line, .. } => {
            hints.push(format!(
                "Reader stopped near line {line} while reading {format} data"
            ));
            hints.push("Trajectory files must be UTF-8 text".into());
        }
        IoError::Labels(_) => {
            hints.push("A label file holds [types] and/or [ids] tables".into());
            hints.push("Keys are integers written as strings, e.g. \"1\" = \"C\"".into());
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and that the output directory exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::WriteZero | ErrorKind::StorageFull => {
            hints.push("Failed to write data (disk full?)".into());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let msg = format!("{err:#}").to_lowercase();

    if msg.contains("chunks") {
        hints.push("--chunks must be a positive integer".into());
    } else if msg.contains("no such file") || msg.contains("not found") {
        hints.push("Check that the input path is correct".into());
    }
}
