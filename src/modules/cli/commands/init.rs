//! Init command implementation

use clap::Args;
use searchlink_core::SearchlinkError;
use std::fs;
use std::path::Path;
use tracing::info;

const CONFIG_FILE: &str = "datasources.yaml";
const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Init command arguments
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Workspace name
    #[arg(default_value = "my-workspace")]
    pub name: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Overwrite an existing datasource file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub async fn execute(&self) -> Result<bool, SearchlinkError> {
        info!("Initializing Searchlink workspace: {}", self.name);

        let output_dir = Path::new(&self.output);
        if !output_dir.exists() {
            fs::create_dir_all(output_dir)?;
        }

        let config_path = output_dir.join(CONFIG_FILE);
        if config_path.exists() && !self.force {
            return Err(SearchlinkError::Config(format!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            )));
        }

        fs::write(&config_path, self.generate_config())?;
        info!("Created: {}", config_path.display());

        let env_path = output_dir.join(ENV_EXAMPLE_FILE);
        fs::write(&env_path, self.generate_env_example())?;
        info!("Created: {}", env_path.display());

        println!("\n✨ Searchlink workspace initialized!");
        println!("\nNext steps:");
        println!("  1. Copy .env.example to .env and point ES_HOST at your cluster");
        println!("  2. Run: searchlink test -f {}", config_path.display());
        println!(
            "  3. Run: searchlink query -f {} -d main --path /_cluster/health",
            config_path.display()
        );

        Ok(true)
    }

    /// Generate datasource file content
    fn generate_config(&self) -> String {
        format!(
            r#"# Searchlink datasources
#
# Values of the form {{{{ env.NAME | fallback }}}} are read from the
# environment (or a .env file) when the file is loaded.

name: {}

datasources:
  main:
    endpoints:
      - "{{{{ env.ES_HOST | localhost:9200 }}}}"
    scheme: "{{{{ env.ES_SCHEME | http }}}}"
    authentication:
      username: "{{{{ env.ES_USERNAME | elastic }}}}"
      password: "{{{{ env.ES_PASSWORD | changeme }}}}"
    headers:
      - key: X-Opaque-Id
        value: {}
"#,
            self.name, self.name
        )
    }

    /// Generate .env.example content
    fn generate_env_example(&self) -> String {
        r#"# Cluster node as host:port
ES_HOST=localhost:9200

# http or https
ES_SCHEME=http

# Basic authentication
ES_USERNAME=elastic
ES_PASSWORD=changeme
"#
        .to_string()
    }
}
