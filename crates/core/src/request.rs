//! Parsed execution request

use std::collections::BTreeMap;

use crate::value::Value;

/// A request after its raw text inputs have been decoded.
///
/// All three parts are independent: library scripts run first, in order,
/// then the inline script. Parameters are bound for every script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionRequest {
    /// Inline script text
    pub script: Option<String>,
    /// Library script names, in execution order
    pub load: Vec<String>,
    /// Named parameters
    pub params: BTreeMap<String, Value>,
}

impl ExecutionRequest {
    /// Request that runs a single inline script
    pub fn inline(script: impl Into<String>) -> Self {
        Self {
            script: Some(script.into()),
            ..Self::default()
        }
    }

    /// Append a library script to run before the inline script
    pub fn with_library(mut self, name: impl Into<String>) -> Self {
        self.load.push(name.into());
        self
    }

    /// Add a named parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// The inline script, if present and non-empty
    pub fn inline_script(&self) -> Option<&str> {
        self.script.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether the request would evaluate anything at all
    pub fn is_empty(&self) -> bool {
        self.load.is_empty() && self.inline_script().is_none()
    }
}
