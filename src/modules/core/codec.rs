//! Stateless JSON helpers used when shaping request and response bodies

use serde_json::Value;

use crate::error::{Result, SearchlinkError};

/// JSON codec with no shared configuration.
///
/// Cheap to copy; every connector owns its own value.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }

    /// Decode a response body into a generic JSON value.
    ///
    /// A blank body decodes to `Null`.
    pub fn decode(&self, text: &str) -> Result<Value> {
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(text).map_err(|e| SearchlinkError::ResponseParse(e.to_string()))
    }

    /// Convert a JSON array into newline-delimited JSON.
    ///
    /// Each element is written compactly on its own line, and the output
    /// always ends with a newline.
    pub fn array_to_ndjson(&self, body: &str) -> Result<String> {
        let items: Vec<Value> =
            serde_json::from_str(body).map_err(|e| SearchlinkError::Conversion(e.to_string()))?;

        let mut out = String::new();
        for item in &items {
            let line = serde_json::to_string(item)
                .map_err(|e| SearchlinkError::Conversion(e.to_string()))?;
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    /// Pretty-print a value for display
    pub fn encode_pretty<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
