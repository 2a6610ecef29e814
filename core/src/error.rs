//! Error types for the species API client.
//!
//! # Design
//! Every failure mode of one walkthrough step lands in `ApiError`: the
//! transport reports network-level faults, any non-2xx status becomes
//! `HttpError` with the raw status and body, and the JSON codec failures
//! keep their serde messages. There is no dedicated 404 variant — the
//! walkthrough aborts on every non-success status alike, the way the
//! original client's `EnsureSuccessStatusCode` did.

use std::fmt;

/// Errors produced while building, executing, or interpreting one request.
#[derive(Debug)]
pub enum ApiError {
    /// The round-trip itself failed: connection refused, DNS, TLS, or the
    /// response body could not be read.
    TransportError(String),

    /// The server answered with a status outside the 2xx range.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// A 2xx envelope arrived without the payload the step needs.
    MissingData(&'static str),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::TransportError(msg) => write!(f, "transport error: {msg}"),
            ApiError::HttpError { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::MissingData(what) => {
                write!(f, "response reported success but carried no {what}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
