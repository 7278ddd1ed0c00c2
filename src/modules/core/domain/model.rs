//! Root workspace configuration

use serde::{Deserialize, Serialize};

use super::Datasource;

/// Root configuration model that represents a datasource file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Name of the workspace
    pub name: String,

    /// Datasource definitions
    #[serde(default)]
    pub datasources: Vec<Datasource>,
}

impl Workspace {
    /// Create a new empty workspace with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datasources: Vec::new(),
        }
    }

    /// Add a datasource to this workspace
    pub fn with_datasource(mut self, datasource: Datasource) -> Self {
        self.datasources.push(datasource);
        self
    }

    /// Find a datasource by name
    pub fn find_datasource(&self, name: &str) -> Option<&Datasource> {
        self.datasources.iter().find(|d| d.name == name)
    }

    /// Names of all datasources, in file order
    pub fn datasource_names(&self) -> Vec<&str> {
        self.datasources.iter().map(|d| d.name.as_str()).collect()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new("searchlink")
    }
}
