//! Connection settings for a search cluster

use searchlink_types::Scheme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Port used when an endpoint omits one
pub const DEFAULT_PORT: u16 = 9200;

/// Reported when a datasource has no endpoints
pub const NO_ENDPOINT_MESSAGE: &str =
    "No endpoint provided. Please provide a host:port where the search cluster is reachable.";

/// One node of the target cluster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EndpointRepr")]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

/// Accepted spellings of an endpoint in configuration files
#[derive(Deserialize)]
#[serde(untagged)]
enum EndpointRepr {
    Address(String),
    Parts {
        host: String,
        #[serde(default)]
        port: Option<u16>,
    },
}

impl TryFrom<EndpointRepr> for Endpoint {
    type Error = String;

    fn try_from(repr: EndpointRepr) -> Result<Self, Self::Error> {
        match repr {
            EndpointRepr::Address(address) => address.parse(),
            EndpointRepr::Parts { host, port } => Ok(Endpoint::new(host, port.unwrap_or(DEFAULT_PORT))),
        }
    }
}

impl FromStr for Endpoint {
    type Err = String;

    /// Parse `host`, `host:port` or `[v6]:port`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Endpoint address cannot be empty".to_string());
        }

        if let Some((host, port)) = s.rsplit_once(':') {
            let bracketed = host.starts_with('[') && host.ends_with(']');
            if bracketed || !host.contains(':') {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| format!("Invalid port in endpoint '{}'", s))?;
                let host = host.trim_start_matches('[').trim_end_matches(']');
                return Ok(Endpoint::new(host, port));
            }
        }

        Ok(Endpoint::new(s.trim_start_matches('[').trim_end_matches(']'), DEFAULT_PORT))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Base URL for this endpoint, without a trailing slash
    pub fn base_url(&self, scheme: Scheme) -> String {
        format!("{}://{}", scheme, self)
    }
}

/// Basic-auth credentials
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Credentials are only applied when both parts are present
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Header sent with every request to the cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticHeader {
    pub key: String,
    pub value: String,
}

impl StaticHeader {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Everything needed to build a client for one datasource
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Cluster nodes, in order
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,

    /// Scheme used for every endpoint (default: http)
    #[serde(default)]
    pub scheme: Scheme,

    /// Optional basic-auth credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Credentials>,

    /// Static headers added to every request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<StaticHeader>,
}

impl ConnectionSettings {
    /// Create settings targeting the given endpoints over plain HTTP
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints,
            ..Self::default()
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.authentication = Some(Credentials::new(username, password));
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(StaticHeader::new(key, value));
        self
    }

    pub fn has_endpoints(&self) -> bool {
        !self.endpoints.is_empty()
    }

    /// Credentials to attach, if both username and password are non-empty
    pub fn basic_auth(&self) -> Option<&Credentials> {
        self.authentication.as_ref().filter(|c| c.is_complete())
    }
}
