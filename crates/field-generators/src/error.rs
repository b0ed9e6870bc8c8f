//! Error types for field generation and data specifier interpretation.

use ocean_common::OceanError;
use raw_io::RawIoError;
use thiserror::Error;

/// Result type for generator and interpreter operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Errors raised while resolving a requested field.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Grid, shape or configuration error
    #[error(transparent)]
    Ocean(#[from] OceanError),

    /// Failure reading a raw input file
    #[error(transparent)]
    RawIo(#[from] RawIoError),

    #[error("Generator '{generator}' expected {expected} argument(s), got {found}")]
    ArgumentCountMismatch {
        generator: String,
        expected: usize,
        found: usize,
    },

    #[error("Generator '{generator}' argument {index} has the wrong type: expected {expected}")]
    ArgumentTypeError {
        generator: String,
        index: usize,
        expected: &'static str,
    },

    #[error("Generator '{generator}' only produces single-layer fields, requested {field_layers} layers")]
    SingleLayerOnly {
        generator: String,
        field_layers: usize,
    },

    #[error("Generator '{generator}' needs numerics.nTimeSteps and numerics.dt")]
    MissingTimeAxis { generator: String },

    #[error("Unknown generator: '{0}'")]
    UnknownGenerator(String),

    #[error("Failed to parse data specifier '{input}': {message}")]
    ParseError { input: String, message: String },

    #[error("Shape mismatch for {origin}: expected shape {expected:?}, found {found} values")]
    ShapeMismatch {
        origin: String,
        expected: Vec<usize>,
        found: usize,
    },
}

impl GeneratorError {
    /// Create an ArgumentCountMismatch error.
    pub fn argument_count(generator: &str, expected: usize, found: usize) -> Self {
        Self::ArgumentCountMismatch {
            generator: generator.to_string(),
            expected,
            found,
        }
    }

    /// Create a ParseError.
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.into(),
            message: message.into(),
        }
    }
}
