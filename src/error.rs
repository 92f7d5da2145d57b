//! Error types shared across the crate.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures of a call to the separator service, including the local
/// validation that runs before a compute request is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Rejected locally, no request was issued.
    #[error("{0}")]
    Validation(String),

    /// The request could not be sent or no response arrived.
    #[error("{0}")]
    Transport(String),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Non-success status. `detail` is the service supplied message, if any.
    #[error("service responded with status {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Service { status: u16, detail: Option<String> },

    /// A response arrived but does not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Message to show the user.
    ///
    /// Validation errors and service details are shown verbatim; everything
    /// else collapses to the call specific `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(message) => message.clone(),
            ApiError::Service {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Malformed(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
