//! Error types for the hansa client libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, protocol, decode, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for hansa client operations.
///
/// This error type covers all possible failure modes in the client,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Protocol errors (non-success HTTP status from the web-service).
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body could not be parsed as the declared content type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Input validation errors, raised before any request is issued.
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

    /// Generic HTTP transport error.
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
        if err.is_decode() {
            Error::Decode(DecodeError::Body {
                message: err.to_string(),
            })
        } else {
            Error::Transport(TransportError::from(err))
        }
    }
}

/// Protocol-level error carrying the HTTP status line of a failed response.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// HTTP reason phrase (if known).
    pub reason: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref reason) = self.reason {
            write!(f, " {}", reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, reason: Option<String>) -> Self {
        Self { status, reason }
    }

    /// Check if this failure indicates missing or rejected authorization.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Response-body decode errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body could not be read or parsed as the declared content type.
    #[error("malformed response body: {message}")]
    Body { message: String },

    /// A plain-text identity response did not contain an integer.
    #[error("malformed identity response: '{value}'")]
    Identity { value: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service URL format.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// Invalid access key format.
    #[error("invalid access key: {reason}")]
    AccessKey { reason: String },

    /// A monetary amount was outside its valid range.
    #[error("invalid amount {value}: {reason}")]
    Amount { value: i64, reason: String },

    /// A required entity field was missing.
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_displays_status_line() {
        let err = ProtocolError::new(404, Some("Not Found".into()));
        assert_eq!(err.to_string(), "HTTP 404 Not Found");

        let err = Error::from(ProtocolError::new(503, None));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn auth_error_detection() {
        assert!(ProtocolError::new(401, None).is_auth_error());
        assert!(ProtocolError::new(403, None).is_auth_error());
        assert!(!ProtocolError::new(500, None).is_auth_error());
    }
}
