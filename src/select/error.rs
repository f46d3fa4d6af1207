use thiserror::Error;

/// Conditions that abort a pipeline before any output is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("start frame ({start}) cannot be greater than end frame ({end})")]
    InvalidWindow { start: i64, end: i64 },

    #[error("sample stride must be at least 1")]
    InvalidStride,

    #[error("number of chunks must be greater than 0")]
    InvalidChunkCount,

    #[error("no frames selected after applying the frame range and stride")]
    EmptySelection,
}
