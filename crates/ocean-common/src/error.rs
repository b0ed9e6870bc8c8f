//! Error types shared by the grid, shape and configuration layers.

use thiserror::Error;

/// Result type alias using OceanError.
pub type OceanResult<T> = Result<T, OceanError>;

/// Errors raised while building grids, resolving shapes or reading configuration.
#[derive(Debug, Error)]
pub enum OceanError {
    // === Grid / shape errors ===
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Unknown field shape tag: '{0}' (expected one of 2dT, 3dT, 2dU, 3dU, 2dV, 3dV, time)")]
    UnknownShapeTag(String),

    #[error("Unsupported field shape for this operation: {0}")]
    UnsupportedShape(String),

    // === Configuration errors ===
    #[error("Missing configuration key: {section}.{key}")]
    MissingKey { section: String, key: String },

    #[error("Invalid configuration value for {section}.{key}: {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OceanError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidValue error for a configuration entry.
    pub fn invalid_value(
        section: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            section: section.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for OceanError {
    fn from(err: serde_yaml::Error) -> Self {
        OceanError::ConfigParse(format!("YAML error: {}", err))
    }
}
