//! CLI commands

mod connectivity;
mod init;
mod query;
mod validate;

pub use connectivity::TestCommand;
pub use init::InitCommand;
pub use query::QueryCommand;
pub use validate::ValidateCommand;

use clap::{Parser, Subcommand};
use searchlink_core::{Datasource, SearchlinkError, Workspace};

/// Searchlink - run requests against Elasticsearch datasources
#[derive(Parser, Debug)]
#[command(name = "searchlink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Datasource file path
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `searchlink test -f prod.yaml`.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "datasources.yaml"
    )]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every datasource's connection settings
    Validate(ValidateCommand),

    /// Run connectivity checks against datasources
    Test(TestCommand),

    /// Send a request to a datasource and print the result
    Query(QueryCommand),

    /// Write a starter datasource file
    Init(InitCommand),
}

/// Look up a datasource by name, listing the known names on failure
pub(crate) fn find_datasource<'a>(
    workspace: &'a Workspace,
    name: &str,
) -> Result<&'a Datasource, SearchlinkError> {
    workspace.find_datasource(name).ok_or_else(|| {
        SearchlinkError::DatasourceNotFound(format!(
            "{} (known: {})",
            name,
            workspace.datasource_names().join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["searchlink", "validate"]).unwrap();
        assert_eq!(cli.config, "datasources.yaml");
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn test_cli_with_file_after_subcommand() {
        let cli = Cli::try_parse_from(["searchlink", "test", "-f", "prod.yaml", "-v"]).unwrap();
        assert_eq!(cli.config, "prod.yaml");
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_query_args() {
        let cli = Cli::try_parse_from([
            "searchlink",
            "query",
            "--datasource",
            "logs",
            "--method",
            "post",
            "--path",
            "/logs/_search",
            "--body",
            "{}",
        ])
        .unwrap();
        match cli.command {
            Commands::Query(cmd) => {
                assert_eq!(cmd.datasource, "logs");
                assert_eq!(cmd.path, "/logs/_search");
                assert_eq!(cmd.body.as_deref(), Some("{}"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_query_body_conflict() {
        let cli = Cli::try_parse_from([
            "searchlink", "query", "-d", "logs", "--path", "/", "--body", "{}", "--body-file",
            "b.json",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_find_datasource_lists_known_names() {
        let workspace = Workspace::new("ws")
            .with_datasource(Datasource::new("logs", Default::default()));
        assert!(find_datasource(&workspace, "logs").is_ok());
        let err = find_datasource(&workspace, "metrics").unwrap_err();
        assert!(err.to_string().contains("known: logs"));
    }
}
