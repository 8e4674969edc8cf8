// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! CBOR serializer (`wamp.2.cbor`).

use std::io::Cursor;

use ciborium::Value as CborValue;

use crate::error::WampError;
use crate::value::{Dict, Value};

/// Serialize to CBOR bytes.
pub fn to_vec(value: &Value) -> Result<Vec<u8>, WampError> {
    let mut buf = Vec::new();
    ciborium::into_writer(&to_cbor(value), &mut buf)
        .map_err(|e| WampError::Serialization(format!("{:?}", e)))?;
    Ok(buf)
}

/// Parse exactly one CBOR data item.
pub fn from_slice(bytes: &[u8]) -> Result<Value, WampError> {
    let mut cursor = Cursor::new(bytes);
    let decoded: CborValue = ciborium::from_reader(&mut cursor)
        .map_err(|e| WampError::Serialization(format!("{:?}", e)))?;
    if usize::try_from(cursor.position()).ok() != Some(bytes.len()) {
        return Err(WampError::Serialization(
            "trailing bytes after cbor value".into(),
        ));
    }
    from_cbor(decoded)
}

/// Convert to a `ciborium` value.
pub fn to_cbor(value: &Value) -> CborValue {
    match value {
        Value::Null => CborValue::Null,
        Value::Bool(b) => CborValue::Bool(*b),
        Value::Integer(i) => CborValue::Integer((*i).into()),
        Value::UInteger(u) => CborValue::Integer((*u).into()),
        Value::Float(f) => CborValue::Float(*f),
        Value::String(s) => CborValue::Text(s.clone()),
        Value::List(items) => CborValue::Array(items.iter().map(to_cbor).collect()),
        Value::Dict(entries) => CborValue::Map(
            entries
                .iter()
                .map(|(k, v)| (CborValue::Text(k.clone()), to_cbor(v)))
                .collect(),
        ),
    }
}

/// Convert from a `ciborium` value.
pub fn from_cbor(value: CborValue) -> Result<Value, WampError> {
    match value {
        CborValue::Null => Ok(Value::Null),
        CborValue::Bool(b) => Ok(Value::Bool(b)),
        CborValue::Integer(i) => {
            let wide = i128::from(i);
            if let Ok(u) = u64::try_from(wide) {
                Ok(Value::UInteger(u))
            } else if let Ok(n) = i64::try_from(wide) {
                Ok(Value::Integer(n))
            } else {
                Err(WampError::Serialization(format!("integer {} out of range", wide)))
            }
        }
        CborValue::Float(f) => Ok(Value::Float(f)),
        CborValue::Text(s) => Ok(Value::String(s)),
        CborValue::Array(items) => items
            .into_iter()
            .map(from_cbor)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        CborValue::Map(entries) => {
            let mut dict = Dict::new();
            for (key, value) in entries {
                let CborValue::Text(key) = key else {
                    return Err(WampError::Serialization(
                        "map key must be a string".into(),
                    ));
                };
                dict.insert(key, from_cbor(value)?);
            }
            Ok(Value::Dict(dict))
        }
        CborValue::Bytes(_) => Err(WampError::Serialization(
            "byte strings are not supported".into(),
        )),
        CborValue::Tag(tag, _) => Err(WampError::Serialization(format!(
            "tagged value {} is not supported",
            tag
        ))),
        _ => Err(WampError::Serialization("unsupported cbor value".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wamp_value;

    #[test]
    fn test_event_frame() {
        let value = wamp_value!([36, 5512315355u64, 4429313566u64, {}, [], {"color": "orange", "sizes": [23, 42, 7]}]);
        let bytes = to_vec(&value).unwrap();
        assert_eq!(bytes[0], 0x86); // array(6)
        assert_eq!(from_slice(&bytes).unwrap(), value);
    }

    #[test]
    fn test_signed_values() {
        let value = wamp_value!([(-1), (i64::MIN), (u64::MAX)]);
        assert_eq!(from_slice(&to_vec(&value).unwrap()).unwrap(), value);
    }

    #[test]
    fn test_rejects_unsupported_items() {
        let mut bytes = Vec::new();
        ciborium::into_writer(&CborValue::Bytes(vec![0xde, 0xad]), &mut bytes).unwrap();
        assert!(matches!(from_slice(&bytes), Err(WampError::Serialization(_))));

        let keyed = CborValue::Map(vec![(CborValue::Integer(1u64.into()), CborValue::Null)]);
        let mut bytes = Vec::new();
        ciborium::into_writer(&keyed, &mut bytes).unwrap();
        assert!(matches!(from_slice(&bytes), Err(WampError::Serialization(_))));

        // 0xf6 is null; one extra byte after it
        assert!(matches!(from_slice(&[0xf6, 0xf6]), Err(WampError::Serialization(_))));
    }
}
