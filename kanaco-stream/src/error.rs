//! Error types for streaming conversion

use std::io;
use thiserror::Error;

/// Errors raised while reading converted lines
#[derive(Error, Debug)]
pub enum StreamError {
    /// The underlying reader failed
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    /// A converted line does not fit in the caller's buffer
    #[error("converted line needs {needed} bytes but the buffer holds {available}")]
    BufferTooSmall {
        /// Size of the converted line
        needed: usize,
        /// Size of the destination buffer
        available: usize,
    },
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Io(err) => err,
            other => io::Error::other(other),
        }
    }
}

/// Result type for stream operations
pub type Result<T> = std::result::Result<T, StreamError>;
