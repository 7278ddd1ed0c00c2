//! Structural validation of datasource files
//!
//! Endpoint presence is not checked here; that belongs to the connector's
//! own settings validation so it can be reported per datasource.

use once_cell::sync::Lazy;
use regex::Regex;
use searchlink_core::{Datasource, SearchlinkError, Workspace};
use std::collections::HashSet;
use tracing::warn;

/// Regex pattern for valid names (lower-kebab-case or lower_snake_case)
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").unwrap());

/// Datasource file validator
pub struct ConfigValidator {
    /// Whether to validate names strictly
    strict_names: bool,
}

impl ConfigValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_names: true }
    }

    /// Create a validator with lenient name checking
    pub fn lenient() -> Self {
        Self {
            strict_names: false,
        }
    }

    /// Validate the whole workspace
    pub fn validate(&self, workspace: &Workspace) -> Result<(), SearchlinkError> {
        self.validate_name("Workspace", &workspace.name)?;

        let mut names = HashSet::new();
        for datasource in &workspace.datasources {
            self.validate_name("Datasource", &datasource.name)?;

            if !names.insert(datasource.name.as_str()) {
                return Err(SearchlinkError::Validation(format!(
                    "Duplicate datasource name: '{}'",
                    datasource.name
                )));
            }

            self.validate_datasource(datasource)?;
        }

        Ok(())
    }

    fn validate_name(&self, what: &str, name: &str) -> Result<(), SearchlinkError> {
        if name.is_empty() {
            return Err(SearchlinkError::Validation(format!(
                "{} name cannot be empty",
                what
            )));
        }

        if self.strict_names && !NAME_PATTERN.is_match(name) {
            return Err(SearchlinkError::Validation(format!(
                "Invalid {} name '{}': must be lower-kebab-case or lower_snake_case",
                what.to_lowercase(),
                name
            )));
        }

        Ok(())
    }

    fn validate_datasource(&self, datasource: &Datasource) -> Result<(), SearchlinkError> {
        let settings = &datasource.settings;

        for endpoint in &settings.endpoints {
            if endpoint.host.trim().is_empty() {
                return Err(SearchlinkError::Validation(format!(
                    "Datasource '{}' has an endpoint with an empty host",
                    datasource.name
                )));
            }
            if endpoint.port == 0 {
                return Err(SearchlinkError::Validation(format!(
                    "Datasource '{}' has an endpoint with port 0: '{}'",
                    datasource.name, endpoint.host
                )));
            }
        }

        for header in &settings.headers {
            if header.key.trim().is_empty() {
                return Err(SearchlinkError::Validation(format!(
                    "Datasource '{}' has a header with an empty key",
                    datasource.name
                )));
            }
        }

        // Half-filled credentials are ignored at connect time
        if let Some(auth) = &settings.authentication {
            if !auth.is_complete() && !(auth.username.is_empty() && auth.password.is_empty()) {
                warn!(
                    "Datasource '{}' has incomplete credentials; requests will be unauthenticated",
                    datasource.name
                );
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
