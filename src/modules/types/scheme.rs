//! Endpoint scheme definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL scheme used to reach every endpoint of a datasource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP
    #[default]
    Http,
    /// HTTP over TLS
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            _ => Err(format!("Unknown scheme: {}", s)),
        }
    }
}

impl Scheme {
    /// Returns true if connections are encrypted
    pub fn is_tls(&self) -> bool {
        matches!(self, Scheme::Https)
    }
}
