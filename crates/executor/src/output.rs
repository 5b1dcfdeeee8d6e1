//! Response types for request execution.
//!
//! Every request produces exactly one [`Response`]. Its body has one of
//! three shapes:
//!
//! | Outcome | Body | Status |
//! |---------|------|--------|
//! | Value produced | `{"success":true,"results":<value>}` | 200 |
//! | No value | `{"success":true}` | 200 |
//! | Any failure | `{"success":false,"errormessage":"<message>"}` | 400 |

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use graphscript_core::Error;

/// Response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Whether the request succeeded and committed
    pub success: bool,
    /// Serialized value of the last evaluated script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<JsonValue>,
    /// Failure message
    #[serde(
        rename = "errormessage",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub error_message: Option<String>,
}

impl ExecutionResult {
    /// Success with a value
    pub(crate) fn with_results(results: JsonValue) -> Self {
        Self {
            success: true,
            results: Some(results),
            error_message: None,
        }
    }

    /// Success without a value
    pub(crate) fn empty() -> Self {
        Self {
            success: true,
            results: None,
            error_message: None,
        }
    }

    /// Failure carrying the error's message
    pub(crate) fn failure(error: &Error) -> Self {
        Self {
            success: false,
            results: None,
            error_message: Some(error.to_string()),
        }
    }
}

/// Response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Request succeeded
    Ok,
    /// Request failed; nothing was committed
    BadRequest,
}

impl Status {
    /// HTTP-style status code
    pub fn code(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
        }
    }
}

/// A status plus a JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Status
    pub status: Status,
    /// Body
    pub body: ExecutionResult,
}

impl Response {
    pub(crate) fn ok(body: ExecutionResult) -> Self {
        Self {
            status: Status::Ok,
            body,
        }
    }

    pub(crate) fn failure(error: &Error) -> Self {
        Self {
            status: Status::BadRequest,
            body: ExecutionResult::failure(error),
        }
    }

    /// Whether the request succeeded
    pub fn is_success(&self) -> bool {
        self.body.success
    }

    /// Body as a JSON value
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(&self.body).unwrap_or(JsonValue::Null)
    }

    /// Body rendered as UTF-8 JSON
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.body).unwrap_or_default()
    }
}
