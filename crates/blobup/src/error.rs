//! Error types for the blobup library.
//!
//! Every failure mode is a typed value returned up the call chain; the
//! library never terminates the process. The binary decides what to do
//! with an error at the top level.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for blobup operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Protocol errors (non-success status, malformed XRPC responses).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Local file read or image decode errors.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors (invalid URL, DID, handle, credentials).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection {
                message: err.to_string(),
            }
        } else {
            TransportError::Http {
                message: err.to_string(),
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(TransportError::from(err))
    }
}

/// Protocol-level errors from XRPC responses.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// XRPC error code (if present).
    pub error: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// A 200-class response whose body did not match the expected shape.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self {
            status: 200,
            error: Some("MalformedResponse".to_string()),
            message: Some(detail.into()),
        }
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.error.as_deref() == Some("AuthenticationRequired")
            || self.error.as_deref() == Some("ExpiredToken")
            || self.error.as_deref() == Some("InvalidToken")
    }
}

/// Local file and image decode errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload file could not be read from disk.
    #[error("failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file bytes did not decode as the expected image format.
    #[error("failed to decode '{path}' as PNG: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Re-encoding the decoded pixel grid failed.
    #[error("failed to encode PNG: {source}")]
    Encode { source: image::ImageError },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid PDS URL format.
    #[error("invalid PDS URL '{value}': {reason}")]
    PdsUrl { value: String, reason: String },

    /// Invalid DID format.
    #[error("invalid DID '{value}': {reason}")]
    Did { value: String, reason: String },

    /// Invalid handle format.
    #[error("invalid handle '{value}': {reason}")]
    Handle { value: String, reason: String },

    /// Missing or empty credentials.
    #[error("invalid credentials: {reason}")]
    Credentials { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display_includes_status_and_code() {
        let err = ProtocolError::new(
            401,
            Some("AuthenticationRequired".to_string()),
            Some("Invalid identifier or password".to_string()),
        );
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("AuthenticationRequired"));
        assert!(text.contains("Invalid identifier or password"));
    }

    #[test]
    fn protocol_error_auth_detection() {
        assert!(ProtocolError::new(401, None, None).is_auth_error());
        assert!(ProtocolError::new(400, Some("ExpiredToken".to_string()), None).is_auth_error());
        assert!(!ProtocolError::new(500, None, None).is_auth_error());
    }
}
