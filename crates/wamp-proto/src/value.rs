// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic wire values.
//!
//! [`Value`] is what the outer serializer hands to the codec: an already
//! parsed tree of scalars, sequences and string-keyed mappings.

use std::collections::BTreeMap;
use std::fmt;

/// String-keyed mapping. Key order is irrelevant for equality.
pub type Dict = BTreeMap<String, Value>;

/// Ordered sequence of values.
pub type List = Vec<Value>;

/// A dynamic value that can hold anything a WAMP message carries.
///
/// Non-negative integers built through the `From` conversions are stored as
/// [`Value::UInteger`]; [`Value::Integer`] is only produced for negative
/// numbers. The serializers follow the same rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    UInteger(u64),
    Float(f64),
    String(String),
    List(List),
    Dict(Dict),
}

impl Value {
    /// Empty dict.
    pub fn dict() -> Self {
        Self::Dict(Dict::new())
    }

    /// Empty list.
    pub fn list() -> Self {
        Self::List(List::new())
    }

    /// Check if value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u64 (non-negative integers only).
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInteger(v) => Some(*v),
            Self::Integer(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::UInteger(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as dict.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(v) => Some(v),
            _ => None,
        }
    }

    /// Dict entry lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Short name of the wire shape, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::UInteger(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
        }
    }

    /// Container nesting depth (0 for scalars, 1 for a flat list or dict).
    pub fn depth(&self) -> usize {
        match self {
            Self::List(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
            Self::Dict(map) => 1 + map.values().map(Value::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    /// `self.depth() > limit`, without walking below `limit + 1` levels.
    pub fn exceeds_depth(&self, limit: usize) -> bool {
        match self {
            Self::List(items) => limit == 0 || items.iter().any(|v| v.exceeds_depth(limit - 1)),
            Self::Dict(map) => limit == 0 || map.values().any(|v| v.exceeds_depth(limit - 1)),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::UInteger(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:?}", v),
            Self::String(v) => write!(f, "{:?}", v),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Dict(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Conversion traits
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::UInteger(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::UInteger(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::UInteger(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInteger(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::UInteger(v as u64)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::from(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        match u64::try_from(v) {
            Ok(u) => Self::UInteger(u),
            Err(_) => Self::Integer(v),
        }
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Dict> for Value {
    fn from(v: Dict) -> Self {
        Self::Dict(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Integer(v) => serializer.serialize_i64(*v),
            Self::UInteger(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::String(v) => serializer.serialize_str(v),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Dict(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Build a [`Value`] from JSON-like syntax.
///
/// Scalars go through `Value::from`; wrap anything longer than a single
/// token (negative numbers, method calls) in parentheses.
///
/// ```
/// use wamp_proto::{wamp_value, Value};
///
/// let v = wamp_value!([48, 7, {"receive_progress": true}, "com.app.add", [1, (-2)]]);
/// assert_eq!(v.as_list().map(|l| l.len()), Some(5));
/// assert_eq!(wamp_value!(null), Value::Null);
/// ```
#[macro_export]
macro_rules! wamp_value {
    (null) => {
        $crate::Value::Null
    };

    ([ $( $elem:tt ),* $(,)? ]) => {
        $crate::Value::List(vec![ $( $crate::wamp_value!($elem) ),* ])
    };

    ({ $( $key:tt : $val:tt ),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::Dict::new();
        $(
            map.insert(::std::string::String::from($key), $crate::wamp_value!($val));
        )*
        $crate::Value::Dict(map)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_canonical_form() {
        assert_eq!(Value::from(42i64), Value::UInteger(42));
        assert_eq!(Value::from(-1i64), Value::Integer(-1));
        assert_eq!(Value::from(7i32).as_u64(), Some(7));
        assert_eq!(Value::Integer(-3).as_u64(), None);
        assert_eq!(Value::UInteger(u64::MAX).as_i64(), None);
    }

    #[test]
    fn test_dict_equality_ignores_insertion_order() {
        let mut a = Dict::new();
        a.insert("x".into(), Value::from(1u64));
        a.insert("y".into(), Value::from(2u64));

        let mut b = Dict::new();
        b.insert("y".into(), Value::from(2u64));
        b.insert("x".into(), Value::from(1u64));

        assert_eq!(Value::Dict(a), Value::Dict(b));
    }

    #[test]
    fn test_macro_builds_nested_values() {
        let v = wamp_value!({"roles": {"caller": {}}, "authmethods": ["ticket"], "n": (-5)});
        assert_eq!(
            v.get("authmethods").and_then(|m| m.as_list()).map(|l| l.len()),
            Some(1)
        );
        assert_eq!(v.get("n"), Some(&Value::Integer(-5)));
        assert_eq!(
            v.get("roles").and_then(|r| r.get("caller")),
            Some(&Value::dict())
        );
        assert_eq!(wamp_value!([]), Value::list());
    }

    #[test]
    fn test_depth() {
        assert_eq!(Value::from("x").depth(), 0);
        assert_eq!(Value::list().depth(), 1);
        assert_eq!(wamp_value!([[1], {"a": [[]]}]).depth(), 4);
    }

    #[test]
    fn test_exceeds_depth() {
        let nested = wamp_value!([[1], {"a": [[]]}]);
        assert!(nested.exceeds_depth(3));
        assert!(!nested.exceeds_depth(4));
        assert!(!Value::from(7u64).exceeds_depth(0));
        assert!(Value::list().exceeds_depth(0));

        // Stops long before the bottom of a very deep tree.
        let mut deep = Value::list();
        for _ in 0..1_000 {
            deep = Value::List(vec![deep]);
        }
        assert!(deep.exceeds_depth(64));
        assert!(!deep.exceeds_depth(1_001));
    }

    #[test]
    fn test_display() {
        let v = wamp_value!([1, "a", {"k": true}]);
        assert_eq!(v.to_string(), r#"[1, "a", {"k": true}]"#);
    }
}
