//! Error types for arffview-core.
//!
//! Every error is recoverable: the view stays usable and the user can pick
//! another file.

use thiserror::Error;

/// Fallback text when neither the server nor the transport produced a message.
pub const GENERIC_UPLOAD_ERROR: &str = "Error uploading file";

/// Errors surfaced to the user by the upload flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Selected file does not carry the `.arff` extension
    #[error("Only files with the .arff extension are allowed")]
    InvalidExtension { file_name: String },
    /// Server answered with a non-2xx status
    #[error("{}", server_message(.status, .message))]
    Server {
        status: u16,
        message: Option<String>,
        detail: Option<String>,
    },
    /// Request never produced a response (DNS, TLS, CORS, connection reset...)
    #[error("{0}")]
    Transport(String),
    /// Selected file could not be read before sending
    #[error("Failed to read {file_name}: {message}")]
    Read { file_name: String, message: String },
}

fn server_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(msg) if !msg.is_empty() => msg.clone(),
        _ => format!("Request failed with status code {}", status),
    }
}

impl UploadError {
    /// Best-available text for the error banner.
    ///
    /// Server `error` field, then the transport message, then
    /// [`GENERIC_UPLOAD_ERROR`].
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_UPLOAD_ERROR.to_string()
        } else {
            message
        }
    }

    /// Secondary explanation sent by the server, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            UploadError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Failure reported by an [`UploadTransport`](crate::upload::UploadTransport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<TransportError> for UploadError {
    fn from(err: TransportError) -> Self {
        UploadError::Transport(err.0)
    }
}

/// Failure reading the contents of a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FileReadError(pub String);

impl FileReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Invalid endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}
