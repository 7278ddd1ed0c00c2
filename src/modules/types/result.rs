//! Result shapes returned to the host after an operation

use serde::{Deserialize, Serialize};

/// Outcome of executing a query against a datasource
///
/// The body is opaque JSON; no row or column metadata is ever derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Whether the request completed and its response parsed
    pub success: bool,
    /// HTTP status returned by the cluster, when a response was received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Parsed response body
    #[serde(default)]
    pub body: serde_json::Value,
    /// Error message if the query failed
    #[serde(default)]
    pub error: String,
}

impl QueryResult {
    /// Create a successful result with the parsed response body
    pub fn success(status_code: u16, body: serde_json::Value) -> Self {
        Self {
            success: true,
            status_code: Some(status_code),
            body,
            error: String::new(),
        }
    }

    /// Create a failed result
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code: None,
            body: serde_json::Value::Null,
            error: message.into(),
        }
    }
}

/// Outcome of a connectivity check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub success: bool,
    /// Diagnostic message; empty when the check passed
    #[serde(default)]
    pub message: String,
}

impl HealthCheckResult {
    /// A passing check
    pub fn healthy() -> Self {
        Self {
            success: true,
            message: String::new(),
        }
    }

    /// A failing check with a diagnostic
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_result_success() {
        let result = QueryResult::success(200, json!({"took": 3}));
        assert!(result.success);
        assert_eq!(result.status_code, Some(200));
        assert!(result.error.is_empty());
        assert_eq!(result.body["took"], json!(3));
    }

    #[test]
    fn test_query_result_error() {
        let result = QueryResult::error("Error performing request: refused");
        assert!(!result.success);
        assert_eq!(result.body, serde_json::Value::Null);
        assert_eq!(result.error, "Error performing request: refused");
    }

    #[test]
    fn test_query_result_serde_omits_missing_status() {
        let json = serde_json::to_string(&QueryResult::error("boom")).unwrap();
        assert!(!json.contains("status_code"));

        let parsed: QueryResult = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.body, serde_json::Value::Null);
    }

    #[test]
    fn test_health_check_result() {
        let ok = HealthCheckResult::healthy();
        assert!(ok.success);
        assert!(ok.message.is_empty());

        let failed = HealthCheckResult::failed("Unexpected response from Elasticsearch: HTTP/1.1 500");
        assert!(!failed.success);
        assert!(failed.message.contains("500"));
    }
}
