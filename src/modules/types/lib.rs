//! Type definitions for Searchlink
//!
//! This crate contains the plain types shared across the Searchlink codebase:
//! HTTP methods, endpoint schemes, and the result shapes handed back to the host.

pub mod method;
pub mod result;
pub mod scheme;

pub use method::HttpMethod;
pub use result::{HealthCheckResult, QueryResult};
pub use scheme::Scheme;
