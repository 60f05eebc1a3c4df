//! Error types and handling for the Meteovuelo application

use thiserror::Error;

/// Main error type for the Meteovuelo application
#[derive(Error, Debug)]
pub enum MeteovueloError {
    /// Provider transport failures (non-200 status or network error)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A locality search that matched nothing
    #[error("No localities matched the search")]
    EmptyResult,

    /// Provider payload that cannot be decoded (JSON or forecast XML)
    #[error("Malformed payload: {message}")]
    MalformedPayload { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl MeteovueloError {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new malformed-payload error
    pub fn malformed_payload<S: Into<String>>(message: S) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for MeteovueloError {
    fn from(err: reqwest::Error) -> Self {
        MeteovueloError::Transport {
            message: err.to_string(),
        }
    }
}
