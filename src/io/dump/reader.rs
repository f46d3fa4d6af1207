use crate::io::{Format, error::Error, util::LineReader};
use crate::model::frame::{DumpFrame, TIMESTEP_MARKER};
use std::io::BufRead;
use std::mem;

#[derive(Debug)]
enum ScanState {
    /// No timestep marker seen yet; leading lines are discarded.
    AwaitingMarker,
    AccumulatingFrame(Vec<String>),
    Finished,
}

/// Lazy, single-pass sequence of [`DumpFrame`]s read from a LAMMPS dump.
///
/// A frame starts at each `ITEM: TIMESTEP` line and runs until the next one;
/// the last buffered frame is emitted at end of stream.
pub struct DumpFrames<R> {
    lines: LineReader<R>,
    state: ScanState,
}

impl<R: BufRead> DumpFrames<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader, Format::Dump),
            state: ScanState::AwaitingMarker,
        }
    }

    fn advance(&mut self) -> Result<Option<DumpFrame>, Error> {
        loop {
            let Some(raw) = self.lines.next_line()? else {
                return Ok(match mem::replace(&mut self.state, ScanState::Finished) {
                    ScanState::AccumulatingFrame(lines) => Some(DumpFrame::new(lines)),
                    ScanState::AwaitingMarker | ScanState::Finished => None,
                });
            };
            let line = raw.trim();

            if line.starts_with(TIMESTEP_MARKER) {
                let next = ScanState::AccumulatingFrame(vec![line.to_string()]);
                if let ScanState::AccumulatingFrame(lines) = mem::replace(&mut self.state, next) {
                    return Ok(Some(DumpFrame::new(lines)));
                }
            } else if let ScanState::AccumulatingFrame(lines) = &mut self.state {
                lines.push(line.to_string());
            }
        }
    }
}

impl<R: BufRead> Iterator for DumpFrames<R> {
    type Item = Result<DumpFrame, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, ScanState::Finished) {
            return None;
        }
        match self.advance() {
            Ok(frame) => frame.map(Ok),
            Err(e) => {
                self.state = ScanState::Finished;
                Some(Err(e))
            }
        }
    }
}

/// Counts timestep markers without buffering frame contents.
pub fn count_frames<R: BufRead>(reader: R) -> Result<usize, Error> {
    let mut lines = LineReader::new(reader, Format::Dump);
    let mut frames = 0;
    while let Some(line) = lines.next_line()? {
        if line.trim_start().starts_with(TIMESTEP_MARKER) {
            frames += 1;
        }
    }
    Ok(frames)
}
