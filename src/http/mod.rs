//! HTTP client module
//!
//! Thin wrapper over `reqwest` that joins paths onto the configured base
//! URL, applies authentication, and turns non-success statuses into
//! [`Error::HttpStatus`](crate::Error::HttpStatus) carrying the response body.
//!
//! Requests are issued exactly once. There is no retry or backoff: a failed
//! request is reported to the caller, which decides whether to continue.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
