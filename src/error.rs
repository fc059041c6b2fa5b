//! Error types for the station front-end
//!
//! This module defines all custom error types used throughout the crate.
//! Fetch failures are deliberately a plain value type: they are absorbed by
//! [`RemoteResource`](crate::resource::RemoteResource) and turned into a
//! display string rather than propagated.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Message shown when a failed fetch carries no usable text at all
pub const DEFAULT_FETCH_ERROR: &str = "An error occurred";

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Contact form errors
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Backend request errors
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The HTTP client could not be constructed
    #[error("Could not build HTTP client: {0}")]
    HttpClient(String),

    /// Generic unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Could not load configuration: {path}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error saving configuration
    #[error("Could not save configuration: {0}")]
    SaveError(String),

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(String),

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Contact / QSL request form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required field was left blank
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// The email address does not look like one
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The backend refused or failed the submission
    #[error("Submission failed: {0}")]
    Rejected(String),
}

impl ContactError {
    /// Create a user-friendly error message suitable for a notification
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingField { .. } => "Please fill in all required fields".to_string(),
            ContactError::InvalidEmail(_) => "Please enter a valid email address".to_string(),
            ContactError::Rejected(message) => message.clone(),
        }
    }
}

/// Structured error body returned by the backend
///
/// Handlers answer `{"error": "..."}`; the framework itself answers
/// `{"detail": ...}` where detail is a string or a list of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorPayload {
    /// Payload carrying only an `error` field
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            detail: None,
        }
    }

    /// Display text carried by the payload, if any
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().filter(|e| !e.trim().is_empty()) {
            return Some(error.to_string());
        }
        match &self.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => {
                Some(detail.clone())
            }
            _ => None,
        }
    }
}

/// A failed fetch attempt
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct FetchError {
    /// The error's own message (transport or status line)
    pub message: String,

    /// HTTP status, when the server answered at all
    pub status: Option<u16>,

    /// Structured body sent by the server, if it parsed
    pub payload: Option<ErrorPayload>,
}

impl FetchError {
    /// Error with a message and nothing else
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            payload: None,
        }
    }

    /// Error carrying a structured payload
    pub fn with_payload(message: impl Into<String>, payload: ErrorPayload) -> Self {
        Self {
            message: message.into(),
            status: None,
            payload: Some(payload),
        }
    }

    /// Error for a non-success HTTP status
    pub fn http(status: u16, payload: Option<ErrorPayload>) -> Self {
        Self {
            message: format!("Request failed with status code {}", status),
            status: Some(status),
            payload,
        }
    }

    /// Message to display: payload text, then own message, then a generic fallback
    pub fn user_message(&self) -> String {
        if let Some(message) = self.payload.as_ref().and_then(ErrorPayload::message) {
            return message;
        }
        if !self.message.trim().is_empty() {
            return self.message.clone();
        }
        DEFAULT_FETCH_ERROR.to_string()
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status: err.status().map(|s| s.as_u16()),
            payload: None,
        }
    }
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for backend requests
pub type FetchResult<T> = Result<T, FetchError>;
