//! Query command implementation

use clap::Args;
use searchlink_core::{JsonCodec, QueryRequest, SearchlinkError};
use searchlink_parser::parse_file;
use searchlink_runtime::{DatasourceManager, ElasticsearchPlugin};
use searchlink_types::HttpMethod;
use std::sync::Arc;

use super::find_datasource;

/// Query command arguments
#[derive(Args, Debug)]
pub struct QueryCommand {
    /// Datasource to send the request to
    #[arg(short, long)]
    pub datasource: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: HttpMethod,

    /// Request path, including any query string
    #[arg(short, long)]
    pub path: String,

    /// Raw request body (JSON, JSON array, or NDJSON)
    #[arg(short, long, conflicts_with = "body_file")]
    pub body: Option<String>,

    /// Read the request body from a file
    #[arg(long)]
    pub body_file: Option<String>,
}

impl QueryCommand {
    /// Build the request from the arguments
    pub fn request(&self) -> Result<QueryRequest, SearchlinkError> {
        let mut request = QueryRequest::new(self.method, self.path.clone());

        let body = match (&self.body, &self.body_file) {
            (Some(body), _) => Some(body.clone()),
            (None, Some(path)) => Some(std::fs::read_to_string(path).map_err(|e| {
                SearchlinkError::Config(format!("Failed to read body file '{}': {}", path, e))
            })?),
            (None, None) => None,
        };
        if let Some(body) = body {
            request = request.with_body(body);
        }

        Ok(request)
    }

    /// Execute the query command
    ///
    /// Prints the result as JSON; returns false if the request failed.
    pub async fn execute(&self, config_path: &str) -> Result<bool, SearchlinkError> {
        let workspace = parse_file(config_path)?;
        let datasource = find_datasource(&workspace, &self.datasource)?;
        let request = self.request()?;

        let manager = DatasourceManager::new(Arc::new(ElasticsearchPlugin::new()));
        manager.initialize(std::slice::from_ref(datasource)).await?;
        let result = manager.execute(&datasource.name, &request).await;
        manager.close_all().await;

        let result = result?;
        println!("{}", JsonCodec::new().encode_pretty(&result)?);

        Ok(result.success)
    }
}
