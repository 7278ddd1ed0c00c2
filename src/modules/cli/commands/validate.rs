//! Validate command implementation

use clap::Args;
use searchlink_core::SearchlinkError;
use searchlink_parser::parse_file;
use searchlink_runtime::{DatasourcePlugin, ElasticsearchPlugin};
use tracing::info;

/// Validate command arguments
#[derive(Args, Debug)]
pub struct ValidateCommand {}

impl ValidateCommand {
    /// Execute the validate command
    ///
    /// Returns false if any datasource has invalid settings.
    pub async fn execute(&self, config_path: &str) -> Result<bool, SearchlinkError> {
        info!("Validating datasources in: {}", config_path);

        let workspace = parse_file(config_path)?;
        let plugin = ElasticsearchPlugin::new();

        if workspace.datasources.is_empty() {
            println!("No datasources defined in {}", config_path);
            return Ok(true);
        }

        let mut valid = true;
        for datasource in &workspace.datasources {
            let invalids = plugin.validate_settings(&datasource.settings);
            if invalids.is_empty() {
                println!("✓ {}", datasource.name);
                continue;
            }

            valid = false;
            for message in invalids {
                println!("✗ {}: {}", datasource.name, message);
            }
        }

        Ok(valid)
    }
}
