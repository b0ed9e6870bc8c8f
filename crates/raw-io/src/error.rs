//! Error types for raw record I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for raw I/O operations.
pub type RawIoResult<T> = Result<T, RawIoError>;

/// Errors raised while reading or writing sequential binary records.
#[derive(Error, Debug)]
pub enum RawIoError {
    /// The file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The record holds a different number of values than the inferred shape needs
    #[error("Shape mismatch in {file}: expected shape {expected:?} ({} values), found {found} values", .expected.iter().product::<usize>())]
    ShapeMismatch {
        file: PathBuf,
        expected: Vec<usize>,
        found: usize,
    },

    /// Record markers disagree or the payload is truncated
    #[error("Corrupt record in {file}: {message}")]
    CorruptRecord { file: PathBuf, message: String },

    /// The payload does not fit in a single 32-bit length-delimited record
    #[error("Record too large: {bytes} bytes exceeds the 4 GiB record limit")]
    RecordTooLarge { bytes: usize },

    /// File I/O error
    #[error("I/O error on {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RawIoError {
    /// Wrap an I/O error, mapping a missing file to `FileNotFound`.
    pub fn from_io(file: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let file = file.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(file)
        } else {
            Self::Io { file, source }
        }
    }

    /// Create a CorruptRecord error.
    pub fn corrupt(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CorruptRecord {
            file: file.into(),
            message: message.into(),
        }
    }
}
