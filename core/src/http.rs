//! Plain-data HTTP types and the transport seam.
//!
//! # Design
//! Requests and responses are described as plain data so the core stays
//! deterministic: `SpeciesClient` builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network. The walkthrough has
//! to drive four round-trips itself, so the "someone else performs the I/O"
//! convention is spelled out as the one-method [`HttpTransport`] trait; the
//! binary implements it over a real agent and tests implement it with a
//! scripted fake.
//!
//! A request carries no header list. The species API needs exactly one
//! header — `Content-Type: application/json` whenever a body is present —
//! and transports apply it from the body's presence.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One HTTP request, ready for a transport to execute.
///
/// `url` is absolute (base address and resource path already joined). A
/// `Some` body is always JSON.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

/// The interesting parts of an executed request: status and raw body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether `status` is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one blocking HTTP round-trip.
///
/// Implementations must not return until the response body has been read in
/// full; the walkthrough relies on that to keep its steps strictly
/// sequential. Network-level failures are reported as
/// [`ApiError::TransportError`].
pub trait HttpTransport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
