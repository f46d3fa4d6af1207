//! Error type for the trajectory pipelines.
//!
//! Only run-level failures surface here: an unusable frame window or chunk
//! count, an empty selection, and I/O failures. Malformed frames and atom
//! rows are handled inside the pipelines and show up in the reports instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested selection cannot be honored; nothing was written.
    #[error(transparent)]
    Selection(#[from] crate::select::Error),

    /// Reading the input or writing an output failed.
    #[error(transparent)]
    Io(#[from] crate::io::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.into())
    }
}
