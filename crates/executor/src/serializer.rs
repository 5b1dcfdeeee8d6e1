//! Result serialization
//!
//! Converts an evaluator result into the JSON placed under `results`.
//!
//! | Value | JSON Representation |
//! |-------|---------------------|
//! | Null, Bool, Int, String | JSON primitive |
//! | Float | JSON number; NaN and infinities are rejected |
//! | Bytes | base64 string |
//! | Array, Object | JSON array, object |
//! | Vertex | `{"id","label","type":"vertex","properties"}` |
//! | Edge | `{"id","label","type":"edge","outV","inV","properties"}` |
//! | Property | `{"key","value"}` |
//!
//! A traversal is drained exactly once into an ordered array.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{json, Map, Value as JsonValue};

use graphscript_core::{Error, EvalResult, Result, Value};

/// Stateless converter from evaluator results to JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultSerializer;

impl ResultSerializer {
    /// Serialize an evaluator result.
    ///
    /// # Errors
    ///
    /// A traversal element error aborts serialization with that error.
    /// Non-finite floats fail with [`Error::Serialization`].
    pub fn serialize(result: EvalResult) -> Result<JsonValue> {
        match result {
            EvalResult::Value(value) => Self::value(&value),
            EvalResult::Traversal(traversal) => {
                let items = traversal
                    .drain()?
                    .iter()
                    .map(Self::value)
                    .collect::<Result<Vec<_>>>()?;
                Ok(JsonValue::Array(items))
            }
        }
    }

    /// Serialize a single value
    pub fn value(value: &Value) -> Result<JsonValue> {
        Ok(match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::Number((*i).into()),
            Value::Float(f) => float_to_json(*f)?,
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Bytes(b) => JsonValue::String(BASE64.encode(b)),
            Value::Array(arr) => {
                JsonValue::Array(arr.iter().map(Self::value).collect::<Result<_>>()?)
            }
            Value::Object(map) => JsonValue::Object(properties(map)?),
            Value::Vertex(v) => json!({
                "id": v.id,
                "label": v.label,
                "type": "vertex",
                "properties": properties(&v.properties)?,
            }),
            Value::Edge(e) => json!({
                "id": e.id,
                "label": e.label,
                "type": "edge",
                "outV": e.out_v,
                "inV": e.in_v,
                "properties": properties(&e.properties)?,
            }),
            Value::Property(p) => json!({
                "key": p.key,
                "value": Self::value(&p.value)?,
            }),
        })
    }
}

fn float_to_json(f: f64) -> Result<JsonValue> {
    serde_json::Number::from_f64(f)
        .map(JsonValue::Number)
        .ok_or_else(|| Error::serialization(format!("cannot encode non-finite float {f}")))
}

fn properties(map: &BTreeMap<String, Value>) -> Result<Map<String, JsonValue>> {
    map.iter()
        .map(|(k, v)| Ok((k.clone(), ResultSerializer::value(v)?)))
        .collect()
}
