//! Transport abstraction between the connector and the network
//!
//! The connector only ever talks to a [`Transport`]; production code uses the
//! pooled reqwest client in [`http`], tests substitute deterministic mocks.

mod http;

pub use http::{HttpTransport, HttpTransportFactory};

use async_trait::async_trait;
use searchlink_core::{ConnectionSettings, SearchlinkError};
use searchlink_types::HttpMethod;
use std::sync::Arc;

/// A request as handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl TransportRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// First header value with the given name, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A fully-read response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status line in the form `HTTP/1.1 404 Not Found`
    pub fn status_line(&self) -> String {
        let reason = reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("");
        format!("HTTP/1.1 {} {}", self.status, reason)
            .trim_end()
            .to_string()
    }
}

/// Sends requests to a cluster over some pooled connection
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and read the whole response body
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, SearchlinkError>;

    /// Release pooled connections; further sends fail
    async fn close(&self) -> Result<(), SearchlinkError>;
}

/// Builds a transport from connection settings without touching the network
pub trait TransportFactory: Send + Sync {
    fn build(&self, settings: &ConnectionSettings) -> Result<Arc<dyn Transport>, SearchlinkError>;
}
