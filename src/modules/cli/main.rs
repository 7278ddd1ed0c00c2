//! Searchlink CLI
//!
//! Command-line interface for the Searchlink Elasticsearch connector.

use clap::Parser;
use searchlink_cli::{Cli, Commands};
use searchlink_core::SearchlinkError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but reported a failure
async fn run() -> Result<bool, SearchlinkError> {
    let cli = Cli::parse();
    let config_path = cli.config.clone();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let fmt_layer = if cli.json_logs {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Validate(cmd) => cmd.execute(&config_path).await,
        Commands::Test(cmd) => cmd.execute(&config_path).await,
        Commands::Query(cmd) => cmd.execute(&config_path).await,
        Commands::Init(cmd) => cmd.execute().await,
    }
}
