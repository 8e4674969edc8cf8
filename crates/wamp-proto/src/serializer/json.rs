// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! JSON serializer (`wamp.2.json`).

use crate::error::WampError;
use crate::value::{Dict, Value};

/// Serialize to JSON bytes.
///
/// Non-finite floats have no JSON form and are rejected.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, WampError> {
    check_finite(value)?;
    serde_json::to_vec(value).map_err(|e| WampError::Serialization(e.to_string()))
}

/// Parse JSON bytes.
pub fn from_slice(bytes: &[u8]) -> Result<Value, WampError> {
    let json: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| WampError::Serialization(e.to_string()))?;
    Ok(Value::from(json))
}

fn check_finite(value: &Value) -> Result<(), WampError> {
    match value {
        Value::Float(f) if !f.is_finite() => Err(WampError::Serialization(format!(
            "cannot represent {} in JSON",
            f
        ))),
        Value::List(items) => items.iter().try_for_each(check_finite),
        Value::Dict(entries) => entries.values().try_for_each(check_finite),
        _ => Ok(()),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::UInteger(u)
                } else if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Dict(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Dict>(),
            ),
        }
    }
}
