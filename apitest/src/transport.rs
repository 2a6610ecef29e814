//! Blocking ureq transport for the walkthrough.
//!
//! # Design
//! One reusable agent per program run. ureq's status-as-error behavior is
//! disabled so 4xx/5xx responses come back as data and the core client
//! decides what counts as failure; only genuine transport faults (refused
//! connection, DNS, TLS, body read) map to `ApiError::TransportError`.
//! Timeouts are whatever the agent defaults to — the walkthrough does not
//! configure them.

use especies_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, HttpTransport};

/// Executes `HttpRequest` values over the network with a shared
/// [`ureq::Agent`].
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.url).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.url).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::TransportError(e.to_string()))?;
        tracing::debug!(status, "response received");

        Ok(HttpResponse { status, body })
    }
}
