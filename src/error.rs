//! Error types for the Orientor CLI

use thiserror::Error;

use crate::session::Route;

/// Result type alias for Orientor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The command navigated away instead of completing (guard or 401).
    #[error("Redirected to {0}")]
    Redirected(Route),

    /// A view finished in its error state with this user-facing message.
    #[error("{0}")]
    View(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// API-related errors, built once at the client boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `orientor login` to sign in again.")]
    Unauthorized,

    #[error("Request failed with status {status}{}", fmt_detail(.detail))]
    RequestFailed { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Server-provided detail message, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::RequestFailed { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// HTTP status for responses that were received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to write session storage: {0}")]
    Storage(String),
}
