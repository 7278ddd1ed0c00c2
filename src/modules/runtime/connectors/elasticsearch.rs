//! Elasticsearch connector implementation (raw HTTP passthrough)

use async_trait::async_trait;
use searchlink_core::{
    ConnectionSettings, JsonCodec, QueryRequest, SearchlinkError, NO_ENDPOINT_MESSAGE,
};
use searchlink_types::{HealthCheckResult, HttpMethod, QueryResult};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

use super::bulk::{content_type_for, is_bulk_path};
use super::traits::DatasourcePlugin;
use crate::transport::{
    HttpTransportFactory, Transport, TransportFactory, TransportRequest, TransportResponse,
};

/// Index-existence probe used by the health check.
///
/// The index is not expected to exist; a reachable cluster answers 200 or 404.
pub const HEALTH_CHECK_PATH: &str = "/potentially-missing-index?local=true";

/// Open client for one Elasticsearch datasource
pub struct SearchConnection {
    transport: Arc<dyn Transport>,
}

impl SearchConnection {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }
}

/// Elasticsearch connector: forwards user-authored requests to the cluster.
pub struct ElasticsearchPlugin {
    factory: Arc<dyn TransportFactory>,
    codec: JsonCodec,
}

impl ElasticsearchPlugin {
    /// Create a connector backed by the pooled reqwest transport
    pub fn new() -> Self {
        Self::with_factory(Arc::new(HttpTransportFactory))
    }

    /// Create a connector that builds its transports with `factory`
    pub fn with_factory(factory: Arc<dyn TransportFactory>) -> Self {
        Self {
            factory,
            codec: JsonCodec::new(),
        }
    }

    /// Shape the outgoing request: bulk array conversion and content type
    fn prepare(&self, request: &QueryRequest) -> Result<TransportRequest, SearchlinkError> {
        let mut body = request.body.clone();

        if is_bulk_path(&request.path) {
            if let Some(raw) = request.body.as_deref() {
                if raw.trim().starts_with('[') {
                    body = Some(self.codec.array_to_ndjson(raw)?);
                }
            }
        }

        let mut outgoing = TransportRequest::new(request.method, request.path.clone());
        if let Some(body) = body {
            outgoing = outgoing
                .with_header("Content-Type", content_type_for(&request.path))
                .with_body(body);
        }
        Ok(outgoing)
    }

    async fn perform(
        &self,
        connection: &SearchConnection,
        request: &QueryRequest,
    ) -> Result<(u16, serde_json::Value), SearchlinkError> {
        let outgoing = self.prepare(request)?;
        let response = connection.transport().send(outgoing).await?;

        // HEAD answers 404 for "does not exist"; that is an answer, not a failure
        let absent_head = request.method.is_head() && response.status == 404;
        if !response.is_success() && !absent_head {
            return Err(status_error(request, &response));
        }

        let body = self.codec.decode(&response.body)?;
        Ok((response.status, body))
    }
}

impl Default for ElasticsearchPlugin {
    fn default() -> Self {
        Self::new()
    }
}

fn status_error(request: &QueryRequest, response: &TransportResponse) -> SearchlinkError {
    let mut message = format!(
        "method [{}], URI [{}], status line [{}]",
        request.method,
        request.path,
        response.status_line()
    );
    if !response.body.is_empty() {
        message.push('\n');
        message.push_str(&response.body);
    }
    SearchlinkError::Transport(message)
}

/// Message carried by a connect or transport failure, without the variant prefix
fn error_detail(err: SearchlinkError) -> String {
    match err {
        SearchlinkError::Transport(detail) | SearchlinkError::Config(detail) => detail,
        other => other.to_string(),
    }
}

#[async_trait]
impl DatasourcePlugin for ElasticsearchPlugin {
    type Connection = SearchConnection;

    fn validate_settings(&self, settings: &ConnectionSettings) -> BTreeSet<String> {
        let mut invalids = BTreeSet::new();
        if !settings.has_endpoints() {
            invalids.insert(NO_ENDPOINT_MESSAGE.to_string());
        }
        invalids
    }

    async fn connect(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<SearchConnection, SearchlinkError> {
        if !settings.has_endpoints() {
            return Err(SearchlinkError::Config(NO_ENDPOINT_MESSAGE.to_string()));
        }

        let transport = self.factory.build(settings)?;
        debug!(
            "Created Elasticsearch client for {} endpoint(s)",
            settings.endpoints.len()
        );
        Ok(SearchConnection::new(transport))
    }

    async fn disconnect(&self, connection: &SearchConnection) {
        if let Err(e) = connection.transport().close().await {
            warn!("Error closing connection to Elasticsearch: {}", e);
        }
    }

    async fn execute(
        &self,
        connection: &SearchConnection,
        _settings: &ConnectionSettings,
        request: &QueryRequest,
    ) -> QueryResult {
        match self.perform(connection, request).await {
            Ok((status, body)) => QueryResult::success(status, body),
            Err(e) => {
                warn!(
                    kind = e.kind(),
                    pre_flight = e.is_pre_flight(),
                    "{} {} failed: {}",
                    request.method,
                    request.path,
                    e
                );
                QueryResult::error(e.to_string())
            }
        }
    }

    async fn test_connection(&self, settings: &ConnectionSettings) -> HealthCheckResult {
        let connection = match self.connect(settings).await {
            Ok(connection) => connection,
            Err(e) => return HealthCheckResult::failed(error_detail(e)),
        };

        let probe = TransportRequest::new(HttpMethod::Head, HEALTH_CHECK_PATH);
        let result = match connection.transport().send(probe).await {
            Err(e) => HealthCheckResult::failed(format!(
                "Error running HEAD request: {}",
                error_detail(e)
            )),
            Ok(response) if response.status == 200 || response.status == 404 => {
                HealthCheckResult::healthy()
            }
            Ok(response) => HealthCheckResult::failed(
                SearchlinkError::Protocol(response.status_line()).to_string(),
            ),
        };

        self.disconnect(&connection).await;
        result
    }
}
