//! Error types for Searchlink

use thiserror::Error;

/// Main error type for Searchlink operations
#[derive(Error, Debug)]
pub enum SearchlinkError {
    /// Invalid or missing connection settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Datasource file validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bulk body was not a well-formed JSON array
    #[error("Error converting array to ND-JSON: {0}")]
    Conversion(String),

    /// Network or I/O failure while talking to the cluster
    #[error("Error performing request: {0}")]
    Transport(String),

    /// Response body was not valid JSON
    #[error("Error parsing response body: {0}")]
    ResponseParse(String),

    /// Health check saw a status outside the accepted set
    #[error("Unexpected response from Elasticsearch: {0}")]
    Protocol(String),

    /// Datasource not found
    #[error("Datasource not found: {0}")]
    DatasourceNotFound(String),

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SearchlinkError {
    /// Returns true if the error was raised before any network activity
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            SearchlinkError::Config(_)
                | SearchlinkError::Validation(_)
                | SearchlinkError::Conversion(_)
                | SearchlinkError::DatasourceNotFound(_)
                | SearchlinkError::EnvVarNotFound(_)
        )
    }

    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            SearchlinkError::Config(_) => "config",
            SearchlinkError::Validation(_) => "validation",
            SearchlinkError::Conversion(_) => "conversion",
            SearchlinkError::Transport(_) => "transport",
            SearchlinkError::ResponseParse(_) => "response_parse",
            SearchlinkError::Protocol(_) => "protocol",
            SearchlinkError::DatasourceNotFound(_) => "datasource_not_found",
            SearchlinkError::EnvVarNotFound(_) => "env_var_not_found",
            SearchlinkError::Io(_) => "io",
            SearchlinkError::Json(_) => "json",
            SearchlinkError::Internal(_) => "internal",
        }
    }
}

/// Result type alias using SearchlinkError
pub type Result<T> = std::result::Result<T, SearchlinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SearchlinkError::Conversion("expected value at line 1 column 2".into());
        assert_eq!(
            err.to_string(),
            "Error converting array to ND-JSON: expected value at line 1 column 2"
        );

        let err = SearchlinkError::Protocol("HTTP/1.1 500 Internal Server Error".into());
        assert_eq!(
            err.to_string(),
            "Unexpected response from Elasticsearch: HTTP/1.1 500 Internal Server Error"
        );
    }

    #[test]
    fn test_error_is_pre_flight() {
        assert!(SearchlinkError::Config("no endpoints".into()).is_pre_flight());
        assert!(SearchlinkError::Conversion("bad array".into()).is_pre_flight());
        assert!(!SearchlinkError::Transport("refused".into()).is_pre_flight());
        assert!(!SearchlinkError::ResponseParse("eof".into()).is_pre_flight());
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(SearchlinkError::Transport("x".into()).kind(), "transport");
        assert_eq!(SearchlinkError::Protocol("x".into()).kind(), "protocol");
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(SearchlinkError::from(io).kind(), "io");
    }
}
