//! Binary-side pieces of the species API walkthrough.
//!
//! The deterministic walkthrough lives in `especies-core`; this crate adds
//! the one thing the binary owns beyond argument parsing — the real,
//! ureq-backed [`HttpTransport`](especies_core::HttpTransport) that executes
//! the walkthrough's requests over the network.

pub mod transport;

pub use transport::UreqTransport;
