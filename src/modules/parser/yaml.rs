//! YAML datasource file parser

use searchlink_core::{ConnectionSettings, Datasource, SearchlinkError, Workspace};
use serde::Deserialize;

use crate::env::EnvInterpolator;

/// YAML parser for datasource files
pub struct YamlParser;

/// Name used when a file does not set one
const DEFAULT_WORKSPACE_NAME: &str = "searchlink";

/// List schema: `datasources: [{ name: ..., endpoints: ... }]`
#[derive(Debug, Deserialize)]
struct ListFile {
    #[serde(default)]
    name: Option<String>,

    datasources: Vec<Datasource>,
}

/// Map-keyed schema: `datasources: { name: { endpoints: ... } }`
///
/// A `serde_yaml::Mapping` keeps the file order of datasources.
#[derive(Debug, Deserialize)]
struct KeyedFile {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    datasources: serde_yaml::Mapping,
}

impl YamlParser {
    /// Parse a YAML string into a Workspace, interpolating environment placeholders
    pub fn parse(content: &str) -> Result<Workspace, SearchlinkError> {
        let interpolated = EnvInterpolator::new().interpolate(content)?;
        Self::parse_raw(&interpolated)
    }

    /// Parse a YAML string without environment interpolation
    ///
    /// The shape of `datasources` picks the schema, so errors come from the
    /// schema the file actually uses.
    pub fn parse_raw(content: &str) -> Result<Workspace, SearchlinkError> {
        let document: serde_yaml::Value = serde_yaml::from_str(content).map_err(yaml_error)?;

        if let Some(serde_yaml::Value::Sequence(_)) = document.get("datasources") {
            let file = serde_yaml::from_str::<ListFile>(content).map_err(yaml_error)?;
            let name = file.name.unwrap_or_else(|| DEFAULT_WORKSPACE_NAME.to_string());
            let mut workspace = Workspace::new(name);
            workspace.datasources = file.datasources;
            return Ok(workspace);
        }

        let keyed = serde_yaml::from_str::<KeyedFile>(content).map_err(yaml_error)?;
        keyed_to_workspace(keyed)
    }
}

fn yaml_error(err: serde_yaml::Error) -> SearchlinkError {
    SearchlinkError::Config(format!("YAML parse error: {}", err))
}

fn keyed_to_workspace(file: KeyedFile) -> Result<Workspace, SearchlinkError> {
    let mut workspace = Workspace::new(file.name.unwrap_or_else(|| DEFAULT_WORKSPACE_NAME.to_string()));

    for (key, value) in file.datasources {
        let name = match key {
            serde_yaml::Value::String(s) => s,
            other => {
                return Err(SearchlinkError::Config(format!(
                    "Datasource names must be strings, found: {:?}",
                    other
                )))
            }
        };

        // `~` or an empty block means "no settings yet"
        let settings = match value {
            serde_yaml::Value::Null => ConnectionSettings::default(),
            other => serde_yaml::from_value::<ConnectionSettings>(other).map_err(|e| {
                SearchlinkError::Config(format!("Datasource '{}': {}", name, e))
            })?,
        };

        workspace.datasources.push(Datasource::new(name, settings));
    }

    Ok(workspace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchlink_types::Scheme;

    #[test]
    fn test_parse_minimal_file() {
        let yaml = r#"
name: minimal
datasources: []
"#;
        let workspace = YamlParser::parse(yaml).unwrap();
        assert_eq!(workspace.name, "minimal");
        assert!(workspace.datasources.is_empty());
    }

    #[test]
    fn test_parse_keyed_file() {
        let yaml = r#"
name: analytics
datasources:
  logs:
    endpoints:
      - "es-1:9200"
      - host: es-2
        port: 9201
    scheme: https
    authentication:
      username: elastic
      password: secret
    headers:
      - key: X-Opaque-Id
        value: searchlink
  metrics:
    endpoints: ["metrics-es"]
"#;
        let workspace = YamlParser::parse_raw(yaml).unwrap();
        assert_eq!(workspace.name, "analytics");
        assert_eq!(workspace.datasource_names(), vec!["logs", "metrics"]);

        let logs = &workspace.datasources[0].settings;
        assert_eq!(logs.endpoints.len(), 2);
        assert_eq!(logs.endpoints[1].port, 9201);
        assert_eq!(logs.scheme, Scheme::Https);
        assert_eq!(logs.basic_auth().unwrap().username, "elastic");
        assert_eq!(logs.headers[0].key, "X-Opaque-Id");

        let metrics = &workspace.datasources[1].settings;
        assert_eq!(metrics.endpoints[0].port, 9200);
        assert_eq!(metrics.scheme, Scheme::Http);
    }

    #[test]
    fn test_parse_list_file() {
        let yaml = r#"
name: listed
datasources:
  - name: logs
    endpoints: ["localhost:9200"]
"#;
        let workspace = YamlParser::parse_raw(yaml).unwrap();
        assert_eq!(workspace.name, "listed");
        assert_eq!(workspace.datasources[0].name, "logs");
    }

    #[test]
    fn test_parse_list_file_without_name() {
        let yaml = r#"
datasources:
  - name: logs
    endpoints: ["localhost:9200"]
"#;
        let workspace = YamlParser::parse_raw(yaml).unwrap();
        assert_eq!(workspace.name, "searchlink");
        assert_eq!(workspace.datasource_names(), vec!["logs"]);
    }

    #[test]
    fn test_parse_list_file_bad_endpoint() {
        let yaml = r#"
name: listed
datasources:
  - name: logs
    endpoints: ["localhost:http"]
"#;
        let err = YamlParser::parse_raw(yaml).unwrap_err().to_string();
        assert!(err.contains("localhost:http"), "{}", err);
        assert!(!err.contains("expected a YAML mapping"), "{}", err);
    }

    #[test]
    fn test_parse_keyed_file_without_name() {
        let yaml = r#"
datasources:
  empty: ~
"#;
        let workspace = YamlParser::parse_raw(yaml).unwrap();
        assert_eq!(workspace.name, "searchlink");
        assert!(workspace.datasources[0].settings.endpoints.is_empty());
    }

    #[test]
    fn test_parse_bad_endpoint() {
        let yaml = r#"
datasources:
  logs:
    endpoints: ["localhost:http"]
"#;
        let err = YamlParser::parse_raw(yaml).unwrap_err();
        assert!(err.to_string().contains("logs"));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let yaml = "invalid: yaml: content: [";
        assert!(YamlParser::parse(yaml).is_err());
    }
}
