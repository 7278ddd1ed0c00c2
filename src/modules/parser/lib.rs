//! Datasource file parsing for Searchlink
//!
//! This crate handles parsing of YAML datasource files, `{{ env.VAR }}`
//! interpolation, and structural validation.

pub mod env;
pub mod validator;
pub mod yaml;

pub use env::EnvInterpolator;
pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use searchlink_core::{SearchlinkError, Workspace};
use std::path::Path;

/// Parse a datasource file from a path
///
/// A `.env` file in the working directory is loaded first when present.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Workspace, SearchlinkError> {
    let path = path.as_ref();
    if let Ok(env_path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", env_path.display());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        SearchlinkError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    parse_string(&content)
}

/// Parse a datasource file from a string
pub fn parse_string(content: &str) -> Result<Workspace, SearchlinkError> {
    let workspace = YamlParser::parse(content)?;

    let validator = ConfigValidator::new();
    validator.validate(&workspace)?;

    Ok(workspace)
}
