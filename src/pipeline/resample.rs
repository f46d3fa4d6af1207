use super::{
    Error, Observer, ResampleConfig, ResampleReport, Stage, create_output, open_input,
    scan_window,
};
use crate::io::{XyzFrames, count_xyz_frames, write_frame};
use crate::select::SelectionWindow;
use log::info;
use std::io::{BufRead, Seek, Write};
use std::path::Path;

/// Copies the selected frames of the XYZ file at `input` to `output`,
/// byte-for-byte.
pub fn resample_file(
    input: &Path,
    output: &Path,
    config: &ResampleConfig,
    observer: &mut dyn Observer,
) -> Result<ResampleReport, Error> {
    let mut reader = open_input(input)?;
    let (total_frames, window) = scan_window(&mut reader, &config.range, |r| count_xyz_frames(r))?;

    let mut writer = create_output(output)?;
    let report = resample_frames(reader, &mut writer, total_frames, window, observer)?;
    writer.flush()?;
    Ok(report)
}

pub fn resample<R, W>(
    mut input: R,
    output: &mut W,
    config: &ResampleConfig,
    observer: &mut dyn Observer,
) -> Result<ResampleReport, Error>
where
    R: BufRead + Seek,
    W: Write,
{
    let (total_frames, window) = scan_window(&mut input, &config.range, |r| count_xyz_frames(r))?;
    resample_frames(input, output, total_frames, window, observer)
}

fn resample_frames<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    total_frames: usize,
    window: SelectionWindow,
    observer: &mut dyn Observer,
) -> Result<ResampleReport, Error> {
    info!(
        "resampling frames {}..={} of {} (stride {})",
        window.start(),
        window.end(),
        total_frames,
        window.stride()
    );

    let mut frames = XyzFrames::new(input);
    let mut frames_written = 0;

    observer.begin(Stage::Resampling, window.span());
    for index in 0.. {
        if window.selects(index) {
            let Some(frame) = frames.next().transpose()? else {
                break;
            };
            write_frame(output, &frame)?;
            frames_written += 1;
        } else if !frames.skip_frame()? {
            break;
        }
        if window.contains(index) {
            observer.advance();
        }
        if window.is_last(index) {
            break;
        }
    }
    observer.finish();

    info!("wrote {frames_written} frame(s)");
    Ok(ResampleReport {
        total_frames,
        window,
        frames_written,
    })
}
