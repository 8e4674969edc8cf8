// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! MessagePack serializer (`wamp.2.msgpack`).

use std::io::Cursor;

use crate::error::WampError;
use crate::value::{Dict, Value};

/// Serialize to MessagePack bytes.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, WampError> {
    let mut buf = Vec::new();
    rmpv::encode::write_value(&mut buf, &to_rmpv(value))
        .map_err(|e| WampError::Serialization(e.to_string()))?;
    Ok(buf)
}

/// Parse exactly one MessagePack value.
pub fn from_slice(bytes: &[u8]) -> Result<Value, WampError> {
    let mut cursor = Cursor::new(bytes);
    let decoded = rmpv::decode::read_value(&mut cursor)
        .map_err(|e| WampError::Serialization(e.to_string()))?;
    if usize::try_from(cursor.position()).ok() != Some(bytes.len()) {
        return Err(WampError::Serialization(format!(
            "{} trailing bytes after msgpack value",
            bytes.len() as u64 - cursor.position()
        )));
    }
    from_rmpv(decoded)
}

/// Convert to an `rmpv` value.
pub fn to_rmpv(value: &Value) -> rmpv::Value {
    match value {
        Value::Null => rmpv::Value::Nil,
        Value::Bool(b) => rmpv::Value::Boolean(*b),
        Value::Integer(i) => rmpv::Value::from(*i),
        Value::UInteger(u) => rmpv::Value::from(*u),
        Value::Float(f) => rmpv::Value::F64(*f),
        Value::String(s) => rmpv::Value::from(s.as_str()),
        Value::List(items) => rmpv::Value::Array(items.iter().map(to_rmpv).collect()),
        Value::Dict(entries) => rmpv::Value::Map(
            entries
                .iter()
                .map(|(k, v)| (rmpv::Value::from(k.as_str()), to_rmpv(v)))
                .collect(),
        ),
    }
}

/// Convert from an `rmpv` value.
pub fn from_rmpv(value: rmpv::Value) -> Result<Value, WampError> {
    match value {
        rmpv::Value::Nil => Ok(Value::Null),
        rmpv::Value::Boolean(b) => Ok(Value::Bool(b)),
        rmpv::Value::Integer(i) => {
            if let Some(u) = i.as_u64() {
                Ok(Value::UInteger(u))
            } else if let Some(n) = i.as_i64() {
                Ok(Value::Integer(n))
            } else {
                Err(WampError::Serialization(format!("integer {} out of range", i)))
            }
        }
        rmpv::Value::F32(f) => Ok(Value::Float(f.into())),
        rmpv::Value::F64(f) => Ok(Value::Float(f)),
        rmpv::Value::String(s) => s
            .into_str()
            .map(Value::String)
            .ok_or_else(|| WampError::Serialization("string is not valid UTF-8".into())),
        rmpv::Value::Array(items) => items
            .into_iter()
            .map(from_rmpv)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        rmpv::Value::Map(entries) => {
            let mut dict = Dict::new();
            for (key, value) in entries {
                let key = match key {
                    rmpv::Value::String(s) => s.into_str().ok_or_else(|| {
                        WampError::Serialization("map key is not valid UTF-8".into())
                    })?,
                    other => {
                        return Err(WampError::Serialization(format!(
                            "map key must be a string, found {}",
                            other
                        )))
                    }
                };
                dict.insert(key, from_rmpv(value)?);
            }
            Ok(Value::Dict(dict))
        }
        rmpv::Value::Binary(_) => Err(WampError::Serialization(
            "binary values are not supported".into(),
        )),
        rmpv::Value::Ext(tag, _) => Err(WampError::Serialization(format!(
            "extension type {} is not supported",
            tag
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wamp_value;

    #[test]
    fn test_welcome_frame() {
        let value = wamp_value!([2, 9129137332u64, {"roles": {"broker": {}}}]);
        let bytes = to_vec(&value).unwrap();
        assert_eq!(bytes[0], 0x93); // fixarray, 3 elements
        assert_eq!(from_slice(&bytes).unwrap(), value);
    }

    #[test]
    fn test_negative_and_float() {
        let value = wamp_value!([(-7), 2.5, null, true]);
        assert_eq!(from_slice(&to_vec(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn test_rejects_non_string_keys() {
        let raw = rmpv::Value::Map(vec![(rmpv::Value::from(1u64), rmpv::Value::Nil)]);
        let mut bytes = Vec::new();
        rmpv::encode::write_value(&mut bytes, &raw).unwrap();
        assert!(matches!(from_slice(&bytes), Err(WampError::Serialization(_))));
    }

    #[test]
    fn test_rejects_binary_and_trailing_bytes() {
        let mut bytes = Vec::new();
        rmpv::encode::write_value(&mut bytes, &rmpv::Value::Binary(vec![1, 2])).unwrap();
        assert!(matches!(from_slice(&bytes), Err(WampError::Serialization(_))));

        let mut bytes = to_vec(&Value::from(1u64)).unwrap();
        bytes.push(0xc0);
        assert!(matches!(from_slice(&bytes), Err(WampError::Serialization(_))));

        assert!(from_slice(&[]).is_err());
    }
}
