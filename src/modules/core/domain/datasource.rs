//! Named datasource configuration

use serde::{Deserialize, Serialize};

use super::ConnectionSettings;

/// A named set of connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasource {
    /// Unique name for this datasource (used on the command line)
    pub name: String,

    #[serde(flatten)]
    pub settings: ConnectionSettings,
}

impl Datasource {
    pub fn new(name: impl Into<String>, settings: ConnectionSettings) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Endpoint;

    #[test]
    fn test_datasource_new() {
        let settings = ConnectionSettings::new(vec![Endpoint::new("localhost", 9200)]);
        let datasource = Datasource::new("logs", settings.clone());
        assert_eq!(datasource.name, "logs");
        assert_eq!(datasource.settings, settings);
    }

    #[test]
    fn test_datasource_serde_flattens_settings() {
        let datasource = Datasource::new(
            "logs",
            ConnectionSettings::new(vec![Endpoint::new("localhost", 9200)]),
        );
        let json = serde_json::to_string(&datasource).unwrap();
        assert!(json.contains("\"name\":\"logs\""));
        assert!(json.contains("\"endpoints\":[{\"host\":\"localhost\",\"port\":9200}]"));

        let parsed: Datasource = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, datasource);
    }
}
