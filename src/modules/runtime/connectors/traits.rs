//! Datasource plugin trait definition

use async_trait::async_trait;
use searchlink_core::{ConnectionSettings, QueryRequest, SearchlinkError};
use searchlink_types::{HealthCheckResult, QueryResult};
use std::collections::BTreeSet;

/// Contract between the host and a datasource connector
///
/// Configuration in, connection out; connection plus configuration plus
/// query in, result out.
#[async_trait]
pub trait DatasourcePlugin: Send + Sync {
    /// Live client for one datasource
    type Connection: Send + Sync;

    /// Check settings without any I/O
    ///
    /// # Returns
    /// Human-readable problems; empty when the settings are usable
    fn validate_settings(&self, settings: &ConnectionSettings) -> BTreeSet<String>;

    /// Build a client for the settings. Never touches the network.
    async fn connect(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<Self::Connection, SearchlinkError>;

    /// Release the client. Failures are logged, not returned.
    async fn disconnect(&self, connection: &Self::Connection);

    /// Run a user-authored request; every failure becomes a failed result
    async fn execute(
        &self,
        connection: &Self::Connection,
        settings: &ConnectionSettings,
        request: &QueryRequest,
    ) -> QueryResult;

    /// Connect, probe the cluster, and always disconnect
    async fn test_connection(&self, settings: &ConnectionSettings) -> HealthCheckResult;
}
