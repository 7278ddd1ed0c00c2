//! Test command implementation

use clap::Args;
use searchlink_core::{Datasource, SearchlinkError};
use searchlink_parser::parse_file;
use searchlink_runtime::{DatasourceManager, ElasticsearchPlugin};
use std::sync::Arc;
use tracing::info;

use super::find_datasource;

/// Test command arguments
#[derive(Args, Debug)]
pub struct TestCommand {
    /// Only test this datasource (default: all)
    #[arg(short, long)]
    pub datasource: Option<String>,
}

impl TestCommand {
    /// Execute the test command
    ///
    /// Returns false if any checked datasource is unhealthy.
    pub async fn execute(&self, config_path: &str) -> Result<bool, SearchlinkError> {
        let workspace = parse_file(config_path)?;

        let datasources: Vec<Datasource> = match &self.datasource {
            Some(name) => vec![find_datasource(&workspace, name)?.clone()],
            None => workspace.datasources.clone(),
        };

        info!("Testing {} datasource(s)", datasources.len());

        let manager = DatasourceManager::new(Arc::new(ElasticsearchPlugin::new()));
        let results = manager.test_all(&datasources).await;

        for (name, result) in &results {
            if result.success {
                println!("✓ {}", name);
            } else {
                println!("✗ {}: {}", name, result.message);
            }
        }

        Ok(results.values().all(|r| r.success))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_command_args() {
        let cmd = TestCommand {
            datasource: Some("logs".to_string()),
        };
        assert_eq!(cmd.datasource.as_deref(), Some("logs"));
    }

    #[tokio::test]
    async fn test_unknown_datasource() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: ws\ndatasources:\n  logs:\n    endpoints: [\"localhost:9200\"]").unwrap();

        let cmd = TestCommand {
            datasource: Some("metrics".to_string()),
        };
        let err = cmd.execute(file.path().to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, SearchlinkError::DatasourceNotFound(_)));
    }

    #[tokio::test]
    async fn test_datasource_without_endpoints_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name: ws\ndatasources:\n  empty: ~").unwrap();

        let ok = TestCommand { datasource: None }
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert!(!ok);
    }
}
