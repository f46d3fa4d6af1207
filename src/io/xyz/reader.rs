use crate::io::{Format, error::Error, util::LineReader};
use crate::model::frame::XyzFrame;
use std::io::BufRead;

/// Lazy, single-pass sequence of verbatim [`XyzFrame`]s.
///
/// The sequence ends cleanly at the first count line that is missing or not a
/// non-negative integer. A frame cut short by end of stream is discarded.
pub struct XyzFrames<R> {
    lines: LineReader<R>,
    finished: bool,
}

impl<R: BufRead> XyzFrames<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader, Format::Xyz),
            finished: false,
        }
    }

    /// Reads one frame. With `retain` unset the atom lines are consumed but
    /// not stored.
    fn read_frame(&mut self, retain: bool) -> Result<Option<XyzFrame>, Error> {
        let Some(count_line) = self.lines.next_line()? else {
            return Ok(None);
        };
        let Ok(atom_count) = count_line.trim().parse::<usize>() else {
            return Ok(None);
        };
        let count_line = count_line.to_string();

        let Some(comment) = self.lines.next_line()? else {
            return Ok(None);
        };
        let comment = comment.to_string();

        let mut atoms = Vec::with_capacity(if retain { atom_count } else { 0 });
        for _ in 0..atom_count {
            let Some(line) = self.lines.next_line()? else {
                return Ok(None);
            };
            if retain {
                atoms.push(line.to_string());
            }
        }

        Ok(Some(XyzFrame {
            count_line,
            comment,
            atoms,
        }))
    }

    fn step(&mut self, retain: bool) -> Option<Result<XyzFrame, Error>> {
        if self.finished {
            return None;
        }
        let result = self.read_frame(retain).transpose();
        if !matches!(result, Some(Ok(_))) {
            self.finished = true;
        }
        result
    }

    /// Skips over the next complete frame, returning whether one was found.
    pub fn skip_frame(&mut self) -> Result<bool, Error> {
        self.step(false).transpose().map(|frame| frame.is_some())
    }
}

impl<R: BufRead> Iterator for XyzFrames<R> {
    type Item = Result<XyzFrame, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step(true)
    }
}

/// Counts complete frames without retaining any atom lines.
pub fn count_frames<R: BufRead>(reader: R) -> Result<usize, Error> {
    let mut frames = XyzFrames::new(reader);
    let mut count = 0;
    while frames.skip_frame()? {
        count += 1;
    }
    Ok(count)
}
