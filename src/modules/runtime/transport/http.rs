//! Pooled HTTP transport backed by reqwest

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use searchlink_core::{ConnectionSettings, Credentials, SearchlinkError, NO_ENDPOINT_MESSAGE};
use searchlink_types::HttpMethod;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Transport, TransportFactory, TransportRequest, TransportResponse};

/// HTTP client shared by every request to one datasource.
///
/// Requests rotate round-robin over the configured endpoints. The underlying
/// `reqwest::Client` pools connections and is safe to share across tasks.
/// Closing drops the client, which shuts its pooled sockets.
pub struct HttpTransport {
    client: RwLock<Option<reqwest::Client>>,
    base_urls: Vec<String>,
    credentials: Option<Credentials>,
    next: AtomicUsize,
}

impl HttpTransport {
    /// Build a client for the given settings
    pub fn new(settings: &ConnectionSettings) -> Result<Self, SearchlinkError> {
        if !settings.has_endpoints() {
            return Err(SearchlinkError::Config(NO_ENDPOINT_MESSAGE.to_string()));
        }

        let client = reqwest::Client::builder()
            .default_headers(default_headers(settings)?)
            .build()
            .map_err(|e| SearchlinkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_urls = settings
            .endpoints
            .iter()
            .map(|endpoint| endpoint.base_url(settings.scheme))
            .collect();

        Ok(Self {
            client: RwLock::new(Some(client)),
            base_urls,
            credentials: settings.basic_auth().cloned(),
            next: AtomicUsize::new(0),
        })
    }

    /// Base URLs of every endpoint, in configuration order
    pub fn base_urls(&self) -> &[String] {
        &self.base_urls
    }

    pub async fn is_closed(&self) -> bool {
        self.client.read().await.is_none()
    }

    fn url_for(&self, path: &str) -> String {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.base_urls.len();
        let base = &self.base_urls[index];
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

fn default_headers(settings: &ConnectionSettings) -> Result<HeaderMap, SearchlinkError> {
    let mut headers = HeaderMap::new();
    for header in &settings.headers {
        let name = HeaderName::from_bytes(header.key.trim().as_bytes()).map_err(|e| {
            SearchlinkError::Config(format!("Invalid header name '{}': {}", header.key, e))
        })?;
        let value = HeaderValue::from_str(&header.value).map_err(|e| {
            SearchlinkError::Config(format!("Invalid value for header '{}': {}", header.key, e))
        })?;
        headers.append(name, value);
    }
    Ok(headers)
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

/// reqwest hides the interesting part of an error in its source chain
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, SearchlinkError> {
        // Cloning shares the pool; an in-flight send keeps it alive until done
        let client = self
            .client
            .read()
            .await
            .clone()
            .ok_or_else(|| SearchlinkError::Transport("client is closed".to_string()))?;

        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = client.request(to_reqwest_method(request.method), &url);
        if let Some(credentials) = &self.credentials {
            builder = builder.basic_auth(&credentials.username, Some(&credentials.password));
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| SearchlinkError::Transport(describe(&e)))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| SearchlinkError::Transport(describe(&e)))?;

        debug!("{} {} -> {}", request.method, url, status);

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }

    async fn close(&self) -> Result<(), SearchlinkError> {
        if self.client.write().await.take().is_some() {
            debug!("Closed HTTP client for {}", self.base_urls.join(", "));
        }
        Ok(())
    }
}

/// Builds [`HttpTransport`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransportFactory;

impl TransportFactory for HttpTransportFactory {
    fn build(&self, settings: &ConnectionSettings) -> Result<Arc<dyn Transport>, SearchlinkError> {
        Ok(Arc::new(HttpTransport::new(settings)?))
    }
}
