use super::{Format, error::Error};
use std::io::{BufRead, ErrorKind};

/// Line-at-a-time reader that keeps line terminators and tracks the
/// current line number for error reporting.
pub(crate) struct LineReader<R> {
    inner: R,
    buf: String,
    line_no: usize,
    format: Format,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, format: Format) -> Self {
        Self {
            inner,
            buf: String::new(),
            line_no: 0,
            format,
        }
    }

    /// Returns the next raw line, or `None` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<&str>, Error> {
        self.buf.clear();
        match self.inner.read_line(&mut self.buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                self.line_no += 1;
                Ok(Some(&self.buf))
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(Error::parse(
                self.format,
                self.line_no + 1,
                "line is not valid UTF-8",
            )),
            Err(e) => Err(e.into()),
        }
    }
}
