//! User-authored request definitions

use searchlink_types::HttpMethod;
use serde::{Deserialize, Serialize};

/// A single request forwarded to the cluster as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// HTTP method
    pub method: HttpMethod,

    /// Request path, optionally with a query string
    pub path: String,

    /// Raw body: a JSON object, a JSON array, or NDJSON text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl QueryRequest {
    /// Create a request without a body
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Set the raw body for this request
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
