//! Error types for preflight.
//!
//! The briefing engine itself never fails; these errors arise only at the
//! edges, while loading configuration or reading provider data.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for preflight operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Input Errors ===
    /// Failed to read a weather input file.
    #[error("failed to read {path}: {source}")]
    InputRead {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The provider returned no observation to brief.
    #[error("no observation found{}", station_suffix(.station))]
    NoObservation {
        /// Station that was requested, if any.
        station: Option<String>,
    },

    /// A value could not be interpreted.
    #[error("invalid {field}: {value:?}")]
    InvalidValue {
        /// What was being parsed.
        field: &'static str,
        /// The offending input.
        value: String,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn station_suffix(station: &Option<String>) -> String {
    station
        .as_ref()
        .map(|s| format!(" for station {s}"))
        .unwrap_or_default()
}

/// A specialized Result type for preflight operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid value error.
    #[must_use]
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Create an input read error for `path`.
    #[must_use]
    pub fn input_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    /// Check if this error is a configuration problem.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }
}
