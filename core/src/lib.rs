//! Synchronous client core for the zoo species API.
//!
//! # Overview
//! Everything here is deterministic: `SpeciesClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network, and
//! `walkthrough::run` drives the four CRUD steps through whatever
//! [`HttpTransport`] the caller supplies. The real agent lives in the
//! `especies-apitest` binary; tests supply scripted transports.
//!
//! # Design
//! - `SpeciesClient` is stateless — base address plus resource path.
//! - Each CRUD operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - The walkthrough is strictly sequential: one blocking round-trip per
//!   step, no step issued until the previous one completed.
//! - DTOs are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;
pub mod walkthrough;

pub use client::SpeciesClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use types::{ApiResult, Species};
pub use walkthrough::{WalkthroughError, SAMPLE_NAME, UPDATED_NAME};
