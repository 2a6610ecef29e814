//! Stateless request builder and response parser for the species API.
//!
//! # Design
//! `SpeciesClient` holds the base address and resource path and carries no
//! mutable state between calls. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; a transport executes the round-trip in
//! between. Any 2xx status counts as success — the original client used
//! `EnsureSuccessStatusCode`, so a 200-or-201 kind of server difference must
//! not matter here. Parsers unwrap the `ApiResult` envelope; the `success`
//! flag inside it is not enforced.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ApiResult, Species};

/// Stateless client for the species API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `base_url` and `resource_path` are normalized so
/// stray slashes in either cannot double up in the joined URLs.
#[derive(Debug, Clone)]
pub struct SpeciesClient {
    base_url: String,
    resource_path: String,
}

impl SpeciesClient {
    pub fn new(base_url: &str, resource_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            resource_path: resource_path.trim_matches('/').to_string(),
        }
    }

    /// URL of the species collection.
    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource_path)
    }

    /// URL of one species record.
    fn record_url(&self, code: i32) -> String {
        format!("{}/{}/{}", self.base_url, self.resource_path, code)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            body: None,
        }
    }

    pub fn build_create(&self, draft: &Species) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(draft)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            body: Some(body),
        })
    }

    /// PUT the full record to `{resource_path}/{code}`, taking the target
    /// code from the record itself.
    pub fn build_update(&self, species: &Species) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(species)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.record_url(species.code),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, code: i32) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.record_url(code),
            body: None,
        }
    }

    /// An absent or null list still parses; it just counts as no records.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Species>, ApiError> {
        check_success(&response)?;
        let envelope: ApiResult<Vec<Species>> = decode(&response.body)?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Species, ApiError> {
        check_success(&response)?;
        let envelope: ApiResult<Species> = decode(&response.body)?;
        envelope.data.ok_or(ApiError::MissingData("created species"))
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Species, ApiError> {
        check_success(&response)?;
        let envelope: ApiResult<Species> = decode(&response.body)?;
        envelope.data.ok_or(ApiError::MissingData("updated species"))
    }

    /// The delete response body is ignored; only the status matters.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Reject any status outside the 2xx range, keeping the body for the error
/// message.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
