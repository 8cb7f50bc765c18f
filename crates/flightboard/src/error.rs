//! Error types for flightboard.
//!
//! This module defines all error types used throughout the flightboard
//! crate. Every board cycle either produces a complete card list or fails
//! as a whole with one of these; nothing renders partially.

use thiserror::Error;

/// The main error type for flightboard operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Data source errors ===
    /// A fetch from an external data source failed.
    #[error("failed to fetch {source_name}: {source}")]
    Fetch {
        /// Which source failed ("flight schedule" or "airport directory").
        source_name: &'static str,
        /// The underlying error.
        #[source]
        source: Box<reqwest::Error>,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(Box<reqwest::Error>),

    // === Configuration errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Schedule errors ===
    /// A leg's date and time did not combine into a valid timestamp.
    #[error("invalid schedule timestamp {date}T{time}")]
    InvalidTimestamp {
        /// The day the leg was grouped under.
        date: String,
        /// The leg's scheduled time string.
        time: String,
    },

    // === Generic errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for flightboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a fetch error tagged with the source it came from.
    #[must_use]
    pub fn fetch(source_name: &'static str, source: reqwest::Error) -> Self {
        Self::Fetch {
            source_name,
            source: Box::new(source),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error came from an external data source.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}
