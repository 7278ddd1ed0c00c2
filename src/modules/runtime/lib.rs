//! Elasticsearch connector runtime for Searchlink
//!
//! This crate provides the transport abstraction, the reqwest-backed pooled
//! client, the datasource plugin contract and its Elasticsearch
//! implementation, and a manager for named connections.

pub mod connectors;
pub mod transport;

pub use connectors::{DatasourceManager, DatasourcePlugin, ElasticsearchPlugin, SearchConnection};
pub use transport::{
    HttpTransport, HttpTransportFactory, Transport, TransportFactory, TransportRequest,
    TransportResponse,
};
