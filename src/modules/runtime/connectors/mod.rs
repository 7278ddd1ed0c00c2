//! Datasource connectors for Searchlink
//!
//! This module provides the datasource plugin contract, the Elasticsearch
//! connector that implements it, and a manager for named connections.

mod bulk;
mod elasticsearch;
mod manager;
mod traits;

pub use bulk::{content_type_for, is_bulk_path, strip_query, JSON_CONTENT_TYPE, NDJSON_CONTENT_TYPE};
pub use elasticsearch::{ElasticsearchPlugin, SearchConnection, HEALTH_CHECK_PATH};
pub use manager::DatasourceManager;
pub use traits::DatasourcePlugin;
