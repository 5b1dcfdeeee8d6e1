//! Raw request decoding
//!
//! A raw request carries three optional text fields as they arrive from the
//! host's entry point. Decoding them is the first fallible step of a request
//! and happens inside its transaction, so a malformed request still rolls
//! back cleanly.

use std::collections::BTreeMap;

use graphscript_core::{Error, ExecutionRequest, Result, Value};
use serde::{Deserialize, Serialize};

/// Request fields as received, before any decoding
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRequest {
    /// Inline script text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    /// Comma-separated library script names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<String>,
    /// JSON object text with named parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
}

impl RawRequest {
    /// Request carrying only an inline script
    pub fn script(script: impl Into<String>) -> Self {
        Self {
            script: Some(script.into()),
            ..Self::default()
        }
    }

    /// Set the `load` field
    pub fn with_load(mut self, load: impl Into<String>) -> Self {
        self.load = Some(load.into());
        self
    }

    /// Set the `params` field
    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = Some(params.into());
        self
    }

    /// Decode into an [`ExecutionRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] when `params` is not the text of a
    /// JSON object.
    pub fn parse(&self) -> Result<ExecutionRequest> {
        Ok(ExecutionRequest {
            script: self.script.clone().filter(|s| !s.is_empty()),
            load: self.load.as_deref().map(split_load).unwrap_or_default(),
            params: match self.params.as_deref() {
                Some(text) => parse_params(text)?,
                None => BTreeMap::new(),
            },
        })
    }
}

/// Split a `load` value on commas.
///
/// Names are kept verbatim. Trailing empty segments are dropped; inner
/// empty segments are kept and fail later when resolved as files.
pub fn split_load(load: &str) -> Vec<String> {
    let mut names: Vec<String> = load.split(',').map(str::to_string).collect();
    while names.last().is_some_and(|s| s.is_empty()) {
        names.pop();
    }
    names
}

/// Decode `params` text into named values
pub fn parse_params(text: &str) -> Result<BTreeMap<String, Value>> {
    match serde_json::from_str::<serde_json::Value>(text)? {
        serde_json::Value::Object(obj) => Ok(obj
            .into_iter()
            .map(|(name, value)| (name, Value::from_json(value)))
            .collect()),
        other => Err(Error::InvalidParams(format!(
            "expected a JSON object, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
