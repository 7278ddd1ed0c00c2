//! Domain models for Searchlink datasources

mod datasource;
mod model;
mod query;
mod settings;

pub use datasource::Datasource;
pub use model::Workspace;
pub use query::QueryRequest;
pub use settings::{
    ConnectionSettings, Credentials, Endpoint, StaticHeader, DEFAULT_PORT, NO_ENDPOINT_MESSAGE,
};
