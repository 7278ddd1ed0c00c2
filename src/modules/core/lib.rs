//! Core domain logic for Searchlink
//!
//! This crate contains the connection and query models, the JSON codec, and
//! the error type shared by every Searchlink crate.

pub mod codec;
pub mod domain;
pub mod error;

pub use codec::JsonCodec;
pub use domain::*;
pub use error::SearchlinkError;
