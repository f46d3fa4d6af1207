use super::{
    ConvertConfig, ConvertReport, Error, FrameTranslator, Observer, Stage, create_output,
    open_input, scan_window,
};
use crate::io::{DumpFrames, count_dump_frames, write_converted};
use crate::select::SelectionWindow;
use log::{debug, info, warn};
use std::io::{BufRead, Seek, Write};
use std::path::Path;

/// Converts the dump at `input` to extended XYZ at `output`.
///
/// The output file is only created once the frame window has been
/// validated.
pub fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConvertConfig,
    observer: &mut dyn Observer,
) -> Result<ConvertReport, Error> {
    let mut reader = open_input(input)?;
    let (total_frames, window) = scan_window(&mut reader, &config.range, |r| count_dump_frames(r))?;

    let mut writer = create_output(output)?;
    let report = convert_frames(reader, &mut writer, total_frames, window, config, observer)?;
    writer.flush()?;
    Ok(report)
}

/// Stream variant of [`convert_file`]. `input` is read twice.
pub fn convert<R, W>(
    mut input: R,
    output: &mut W,
    config: &ConvertConfig,
    observer: &mut dyn Observer,
) -> Result<ConvertReport, Error>
where
    R: BufRead + Seek,
    W: Write,
{
    let (total_frames, window) = scan_window(&mut input, &config.range, |r| count_dump_frames(r))?;
    convert_frames(input, output, total_frames, window, config, observer)
}

fn convert_frames<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    total_frames: usize,
    window: SelectionWindow,
    config: &ConvertConfig,
    observer: &mut dyn Observer,
) -> Result<ConvertReport, Error> {
    info!(
        "converting frames {}..={} of {} (stride {})",
        window.start(),
        window.end(),
        total_frames,
        window.stride()
    );

    let translator = FrameTranslator::new(&config.labels, config.filter.as_ref());
    let mut report = ConvertReport::new(total_frames, window);

    observer.begin(Stage::Converting, window.span());
    for (index, frame) in DumpFrames::new(input).enumerate() {
        let frame = frame?;
        if window.selects(index) {
            match translator.translate(&frame) {
                Ok(converted) => {
                    if converted.identifier_fallback && !report.identifier_fallback {
                        warn!(
                            "no 'id' column in dump (first seen at frame {index}); using atom type as identifier"
                        );
                        report.identifier_fallback = true;
                    }
                    if converted.dropped_atoms > 0 {
                        debug!(
                            "frame {index}: skipped {} malformed atom row(s)",
                            converted.dropped_atoms
                        );
                    }
                    report.atoms_dropped += converted.dropped_atoms;
                    write_converted(output, &converted)?;
                    report.frames_written += 1;
                }
                Err(rejection) => {
                    debug!("frame {index}: skipped ({rejection})");
                    report.frames_rejected += 1;
                }
            }
        }
        if window.contains(index) {
            observer.advance();
        }
        if window.is_last(index) {
            break;
        }
    }
    observer.finish();

    info!(
        "wrote {} frame(s), rejected {}",
        report.frames_written, report.frames_rejected
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::XyzFrames;
    use crate::select::{self, FrameRange};
    use std::collections::HashSet;
    use std::io::Cursor;

    fn dump<const N: usize>(frames: &[(u64, [(i64, i64, [f64; 3]); N])]) -> String {
        let mut text = String::new();
        for (timestep, atoms) in frames {
            text.push_str(&format!(
                "ITEM: TIMESTEP\n{timestep}\nITEM: NUMBER OF ATOMS\n{}\n\
                 ITEM: BOX BOUNDS pp pp pp\n0.0 10.0\n0.0 10.0\n0.0 10.0\n\
                 ITEM: ATOMS id type x y z\n",
                atoms.len()
            ));
            for (id, atom_type, [x, y, z]) in atoms {
                text.push_str(&format!("{id} {atom_type} {x} {y} {z}\n"));
            }
        }
        text
    }

    fn three_frames() -> String {
        dump(&[
            (0, [(1, 1, [0.0, 0.0, 0.0]), (2, 2, [1.0, 1.0, 1.0])]),
            (100, [(1, 1, [0.5, 0.0, 0.0]), (2, 2, [1.5, 1.0, 1.0])]),
            (200, [(1, 1, [1.0, 0.0, 0.0]), (2, 2, [2.0, 1.0, 1.0])]),
        ])
    }

    fn run(input: &str, config: &ConvertConfig) -> Result<(ConvertReport, String), Error> {
        let mut out = Vec::new();
        let report = convert(Cursor::new(input), &mut out, config, &mut ())?;
        Ok((report, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn converts_every_frame_by_default() {
        let (report, text) = run(&three_frames(), &ConvertConfig::default()).unwrap();
        assert_eq!(report.total_frames, 3);
        assert_eq!(report.frames_written, 3);

        let frames: Vec<_> = XyzFrames::new(Cursor::new(&text))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(frames.len(), 3);
        for frame in &frames {
            assert!(frame.comment.contains("Properties=species:S:1:pos:R:3:id:I:1"));
            assert!(frame.comment.contains("Lattice=\"10.0 0.0 0.0 0.0 10.0 0.0 0.0 0.0 10.0\""));
        }
        assert!(frames[1].comment.starts_with("Timestep=100 "));
        assert_eq!(frames[2].atoms, vec!["C 1.0 0.0 0.0 1\n", "Xe 2.0 1.0 1.0 2\n"]);
    }

    #[test]
    fn applies_window_and_stride() {
        let config = ConvertConfig {
            range: FrameRange::new(Some(0), None, 2),
            ..ConvertConfig::default()
        };
        let (report, text) = run(&three_frames(), &config).unwrap();
        assert_eq!(report.frames_written, 2);
        let timesteps: Vec<_> = text.lines().filter(|l| l.starts_with("Timestep=")).collect();
        assert!(timesteps[0].starts_with("Timestep=0 "));
        assert!(timesteps[1].starts_with("Timestep=200 "));
    }

    #[test]
    fn filter_drops_other_types_from_count() {
        let config = ConvertConfig {
            filter: Some(HashSet::from([2])),
            ..ConvertConfig::default()
        };
        let (_, text) = run(&three_frames(), &config).unwrap();
        let frames: Vec<_> = XyzFrames::new(Cursor::new(&text))
            .collect::<Result<_, _>>()
            .unwrap();
        for frame in frames {
            assert_eq!(frame.count_line, "1\n");
            assert!(frame.atoms[0].starts_with("Xe "));
        }
    }

    #[test]
    fn invalid_window_writes_nothing() {
        let config = ConvertConfig {
            range: FrameRange::new(Some(2), Some(1), 1),
            ..ConvertConfig::default()
        };
        let mut out = Vec::new();
        let err = convert(Cursor::new(three_frames()), &mut out, &config, &mut ()).unwrap_err();
        assert!(matches!(
            err,
            Error::Selection(select::Error::InvalidWindow { start: 2, end: 1 })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn out_of_range_bounds_are_clamped() {
        let config = ConvertConfig {
            range: FrameRange::new(Some(-3), Some(99), 1),
            ..ConvertConfig::default()
        };
        let (report, _) = run(&three_frames(), &config).unwrap();
        assert_eq!((report.window.start(), report.window.end()), (0, 2));
        assert_eq!(report.frames_written, 3);
    }

    #[test]
    fn rejected_frames_are_counted_not_written() {
        let mut input = three_frames();
        input.push_str("ITEM: TIMESTEP\n300\nITEM: NUMBER OF ATOMS\n0\n");
        let (report, text) = run(&input, &ConvertConfig::default()).unwrap();
        assert_eq!(report.total_frames, 4);
        assert_eq!(report.frames_written, 3);
        assert_eq!(report.frames_rejected, 1);
        assert!(!text.contains("Timestep=300"));
    }

    #[test]
    fn reports_identifier_fallback_once() {
        let input = "ITEM: TIMESTEP\n0\nITEM: NUMBER OF ATOMS\n1\nITEM: ATOMS type x y z\n2 0 0 0\n\
                     ITEM: TIMESTEP\n1\nITEM: NUMBER OF ATOMS\n1\nITEM: ATOMS type x y z\n2 1 1 1\n";
        let (report, text) = run(input, &ConvertConfig::default()).unwrap();
        assert!(report.identifier_fallback);
        assert!(text.contains("Xe 1.0 1.0 1.0 2\n"));
    }

    #[test]
    fn column_layout_is_resolved_per_frame() {
        let input = "ITEM: TIMESTEP\n0\nITEM: NUMBER OF ATOMS\n1\nITEM: ATOMS id type x y z\n1 1 1 2 3\n\
                     ITEM: TIMESTEP\n1\nITEM: NUMBER OF ATOMS\n1\nITEM: ATOMS z y x type id\n3 2 1 1 1\n";
        let (_, text) = run(input, &ConvertConfig::default()).unwrap();
        let atom_lines: Vec<_> = text.lines().filter(|l| l.starts_with("C ")).collect();
        assert_eq!(atom_lines, vec!["C 1.0 2.0 3.0 1", "C 1.0 2.0 3.0 1"]);
    }

    #[test]
    fn counts_progress_for_frames_in_window() {
        #[derive(Default)]
        struct Counter {
            total: usize,
            ticks: usize,
            finished: bool,
        }
        impl Observer for Counter {
            fn begin(&mut self, _stage: Stage, total: usize) {
                self.total = total;
            }
            fn advance(&mut self) {
                self.ticks += 1;
            }
            fn finish(&mut self) {
                self.finished = true;
            }
        }

        let config = ConvertConfig {
            range: FrameRange::new(Some(1), None, 5),
            ..ConvertConfig::default()
        };
        let mut counter = Counter::default();
        let mut out = Vec::new();
        let report = convert(Cursor::new(three_frames()), &mut out, &config, &mut counter).unwrap();
        assert_eq!(report.frames_written, 1);
        assert_eq!((counter.total, counter.ticks, counter.finished), (2, 2, true));
    }

    #[test]
    fn converts_files_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("traj.lammpstrj");
        let output = dir.path().join("traj.xyz");
        std::fs::write(&input, three_frames()).unwrap();

        let report = convert_file(&input, &output, &ConvertConfig::default(), &mut ()).unwrap();
        assert_eq!(report.frames_written, 3);
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 3 * 4);
    }

    #[test]
    fn invalid_window_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.lammpstrj");
        let output = dir.path().join("out.xyz");
        std::fs::write(&input, "").unwrap();

        assert!(convert_file(&input, &output, &ConvertConfig::default(), &mut ()).is_err());
        assert!(!output.exists());
    }
}
