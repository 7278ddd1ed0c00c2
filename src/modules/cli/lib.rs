//! Searchlink CLI
//!
//! This crate provides the command-line interface for Searchlink including:
//! - validate: Check datasource settings
//! - test: Run connectivity checks
//! - query: Send a request to a datasource
//! - init: Write a starter datasource file

pub mod commands;

pub use commands::{Cli, Commands};
