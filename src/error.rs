/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types returned by every client operation.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The network call could not complete (connection, TLS, send or read failure)
    Network(reqwest::Error),
    /// No bearer credential was found in local storage
    AuthenticationMissing,
    /// The server answered with a status outside the operation's accepted set
    Unexpected(StatusCode),
    /// The server answered 404 to a single-resource fetch
    NotFound,
    /// The decoded body does not match any accepted shape
    UnexpectedPayloadShape(String),
    /// A request payload was rejected before sending
    InvalidInput(String),
    /// An outgoing body could not be serialized
    Json(serde_json::Error),
    /// Local file access failed
    Io(std::io::Error),
    /// The local key-value store holds unreadable contents
    Storage(String),
}

impl AppError {
    /// Returns the HTTP status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Unexpected(status) => Some(*status),
            AppError::NotFound => Some(StatusCode::NOT_FOUND),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "transport error: {e}"),
            AppError::AuthenticationMissing => write!(f, "authentication missing"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::NotFound => write!(f, "not found"),
            AppError::UnexpectedPayloadShape(msg) => write!(f, "unexpected payload shape: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
