// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field kinds and field descriptors.

use crate::error::ValidationError;
use crate::value::Value;

/// Semantic wire type of a message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "UPPERCASE"))]
pub enum FieldKind {
    /// Dot-separated identifier carried as a string.
    Uri,
    /// Message code of another message type (u64).
    Code,
    /// Session, request or resource ID (u64).
    Id,
    /// String-keyed mapping.
    Dict,
    /// Ordered sequence.
    List,
    /// Free-form string.
    String,
}

impl FieldKind {
    /// Upper-case kind name as used in the protocol tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uri => "URI",
            Self::Code => "CODE",
            Self::Id => "ID",
            Self::Dict => "DICT",
            Self::List => "LIST",
            Self::String => "STRING",
        }
    }

    /// Value used when the field is optional and absent.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Uri | Self::String => Value::String(String::new()),
            Self::Code | Self::Id => Value::UInteger(0),
            Self::Dict => Value::dict(),
            Self::List => Value::list(),
        }
    }

    /// Check shape and type of a candidate value.
    pub fn validate(&self, candidate: &Value) -> Result<(), ValidationError> {
        match self {
            Self::Uri => {
                let uri = expect_str(candidate)?;
                check_uri(uri)
            }
            Self::String => expect_str(candidate).map(|_| ()),
            Self::Code | Self::Id => to_u64(candidate).map(|_| ()),
            Self::Dict => match candidate {
                Value::Dict(_) => Ok(()),
                other => Err(wrong_type("dict", other)),
            },
            Self::List => match candidate {
                Value::List(_) => Ok(()),
                other => Err(wrong_type("list", other)),
            },
        }
    }

    /// Validate and return the canonical wire form.
    ///
    /// ID and CODE values are narrowed to [`Value::UInteger`]; integral
    /// floats are accepted, fractional or negative ones are not.
    pub fn coerce(&self, candidate: &Value) -> Result<Value, ValidationError> {
        match self {
            Self::Code | Self::Id => to_u64(candidate).map(Value::UInteger),
            _ => {
                self.validate(candidate)?;
                Ok(candidate.clone())
            }
        }
    }
}

fn wrong_type(expected: &'static str, found: &Value) -> ValidationError {
    ValidationError::WrongType {
        expected,
        found: found.kind_name(),
    }
}

fn expect_str(candidate: &Value) -> Result<&str, ValidationError> {
    candidate
        .as_str()
        .ok_or_else(|| wrong_type("string", candidate))
}

// 2^64 as f64; every finite float below it fits in u64.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn to_u64(candidate: &Value) -> Result<u64, ValidationError> {
    match candidate {
        Value::UInteger(v) => Ok(*v),
        Value::Integer(v) => u64::try_from(*v).map_err(|_| ValidationError::Negative(*v)),
        Value::Float(v) => {
            let v = *v;
            if !v.is_finite() {
                return Err(ValidationError::NotFinite);
            }
            if v.fract() != 0.0 {
                return Err(ValidationError::Fractional(v));
            }
            if v < 0.0 {
                return Err(ValidationError::Negative(v as i64));
            }
            if v >= U64_LIMIT {
                return Err(ValidationError::OutOfRange);
            }
            Ok(v as u64)
        }
        other => Err(wrong_type("unsigned integer", other)),
    }
}

/// WAMP loose URI rule: non-empty dot-separated components, none of which
/// contains whitespace or `#`.
fn check_uri(uri: &str) -> Result<(), ValidationError> {
    if uri.is_empty() {
        return Err(ValidationError::EmptyUri);
    }
    let well_formed = uri
        .split('.')
        .all(|part| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '#'));
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::MalformedUri(uri.to_string()))
    }
}

/// Descriptor for one positional field of a message type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FieldDescriptor {
    /// Field name, unique within its message type.
    pub name: String,
    /// Field kind.
    pub kind: FieldKind,
    /// 0-based position (wire index is `position + 1`). Assigned at registration.
    pub position: usize,
    /// Absent required fields are a decode/encode error.
    pub required: bool,
    /// Redact the value in `Debug` output.
    pub hidden_in_debug: bool,
    /// Value used when the field is optional and absent.
    pub default: Value,
}

impl FieldDescriptor {
    /// Create a required field with the kind's default value.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            position: 0,
            required: true,
            hidden_in_debug: false,
            default: kind.default_value(),
        }
    }

    /// Mark as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Hide from debug output.
    pub fn hidden(mut self) -> Self {
        self.hidden_in_debug = true;
        self
    }

    /// Set default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    pub(crate) fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Index of this field in the wire sequence (the code sits at 0).
    pub fn wire_index(&self) -> usize {
        self.position + 1
    }

    /// Check a candidate value against this field.
    pub fn validate(&self, candidate: &Value) -> Result<(), ValidationError> {
        self.coerce(candidate).map(|_| ())
    }

    /// Validate and canonicalize a candidate value for this field.
    ///
    /// An optional URI field whose default is the empty string accepts the
    /// empty string.
    pub fn coerce(&self, candidate: &Value) -> Result<Value, ValidationError> {
        if self.allows_empty_uri() && candidate.as_str() == Some("") {
            return Ok(candidate.clone());
        }
        self.kind.coerce(candidate)
    }

    fn allows_empty_uri(&self) -> bool {
        self.kind == FieldKind::Uri && !self.required && self.default.as_str() == Some("")
    }
}
