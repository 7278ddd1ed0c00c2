//! Connection manager for named datasources

use searchlink_core::{ConnectionSettings, Datasource, QueryRequest, SearchlinkError};
use searchlink_types::{HealthCheckResult, QueryResult};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::traits::DatasourcePlugin;

/// Maximum number of health checks in flight at once
const HEALTH_CHECK_CONCURRENCY: usize = 16;

struct ManagedDatasource<C> {
    settings: ConnectionSettings,
    connection: C,
}

/// Keeps one open connection per datasource name
pub struct DatasourceManager<P: DatasourcePlugin> {
    plugin: Arc<P>,
    connections: RwLock<HashMap<String, Arc<ManagedDatasource<P::Connection>>>>,
}

impl<P> DatasourceManager<P>
where
    P: DatasourcePlugin + 'static,
    P::Connection: 'static,
{
    /// Create a new empty manager around a plugin
    pub fn new(plugin: Arc<P>) -> Self {
        Self {
            plugin,
            connections: RwLock::new(HashMap::new()),
        }
    }

    pub fn plugin(&self) -> &Arc<P> {
        &self.plugin
    }

    /// Validate and connect every datasource
    ///
    /// All settings are validated before any connection is built; connections
    /// are then created in parallel. If any connect fails, the ones that
    /// succeeded are disconnected and nothing is registered.
    pub async fn initialize(&self, datasources: &[Datasource]) -> Result<(), SearchlinkError> {
        use tokio::task::JoinSet;

        for datasource in datasources {
            let invalids = self.plugin.validate_settings(&datasource.settings);
            if !invalids.is_empty() {
                return Err(SearchlinkError::Config(format!(
                    "Datasource '{}': {}",
                    datasource.name,
                    invalids.into_iter().collect::<Vec<_>>().join(" ")
                )));
            }
        }

        let mut set = JoinSet::new();
        for datasource in datasources.iter().cloned() {
            let plugin = self.plugin.clone();
            set.spawn(async move {
                let connection = plugin.connect(&datasource.settings).await?;
                Ok::<_, SearchlinkError>((datasource, connection))
            });
        }

        // Wait for every task so a failure cannot strand a connection
        let mut connected = Vec::with_capacity(datasources.len());
        let mut failure = None;
        while let Some(result) = set.join_next().await {
            match result {
                Ok(Ok(pair)) => connected.push(pair),
                Ok(Err(e)) => {
                    failure.get_or_insert(e);
                }
                Err(e) => {
                    failure.get_or_insert(SearchlinkError::Internal(format!(
                        "Task join error: {}",
                        e
                    )));
                }
            }
        }

        if let Some(err) = failure {
            warn!(
                "Initialization failed, releasing {} connection(s): {}",
                connected.len(),
                err
            );
            for (_, connection) in connected {
                self.plugin.disconnect(&connection).await;
            }
            return Err(err);
        }

        let mut connections = self.connections.write().await;
        for (datasource, connection) in connected {
            debug!("Connected datasource '{}'", datasource.name);
            let managed = ManagedDatasource {
                settings: datasource.settings,
                connection,
            };
            if let Some(previous) = connections.insert(datasource.name, Arc::new(managed)) {
                self.plugin.disconnect(&previous.connection).await;
            }
        }

        Ok(())
    }

    /// Execute a request against a named datasource
    pub async fn execute(
        &self,
        name: &str,
        request: &QueryRequest,
    ) -> Result<QueryResult, SearchlinkError> {
        let managed = self.get(name).await?;
        info!("Executing {} {} on '{}'", request.method, request.path, name);
        Ok(self
            .plugin
            .execute(&managed.connection, &managed.settings, request)
            .await)
    }

    async fn get(
        &self,
        name: &str,
    ) -> Result<Arc<ManagedDatasource<P::Connection>>, SearchlinkError> {
        let connections = self.connections.read().await;
        connections
            .get(name)
            .cloned()
            .ok_or_else(|| SearchlinkError::DatasourceNotFound(name.to_string()))
    }

    /// Check if a datasource is connected
    pub async fn has(&self, name: &str) -> bool {
        let connections = self.connections.read().await;
        connections.contains_key(name)
    }

    /// Names of all connected datasources, sorted
    pub async fn names(&self) -> Vec<String> {
        let connections = self.connections.read().await;
        let mut names: Vec<String> = connections.keys().cloned().collect();
        names.sort();
        names
    }

    /// Run connectivity checks for the given datasources concurrently
    ///
    /// Each check opens and closes its own connection.
    pub async fn test_all(&self, datasources: &[Datasource]) -> BTreeMap<String, HealthCheckResult> {
        use futures::stream::{self, StreamExt};

        let plugin = &self.plugin;
        stream::iter(datasources)
            .map(|datasource| async move {
                let result = plugin.test_connection(&datasource.settings).await;
                (datasource.name.clone(), result)
            })
            .buffer_unordered(HEALTH_CHECK_CONCURRENCY)
            .collect()
            .await
    }

    /// Disconnect every datasource and forget it
    pub async fn close_all(&self) {
        let drained: Vec<_> = {
            let mut connections = self.connections.write().await;
            connections.drain().collect()
        };

        for (name, managed) in drained {
            debug!("Closing datasource '{}'", name);
            self.plugin.disconnect(&managed.connection).await;
        }
    }
}
