// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for catalog construction, validation and the codec.
//!
//! Malformed input never panics: every failure surfaces as a [`WampError`].

use std::fmt;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Why a single field value was rejected by its [`FieldKind`](crate::FieldKind).
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The value has the wrong wire shape for the kind.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// URI fields must not be empty.
    EmptyUri,
    /// URI is not well formed (contains whitespace, `#` or empty components).
    MalformedUri(String),
    /// Numeric ID/CODE carried as a float with a fractional part.
    Fractional(f64),
    /// Numeric ID/CODE is negative.
    Negative(i64),
    /// Value exceeds the allowed range (u64, WAMP ID range or nesting depth).
    OutOfRange,
    /// NaN or infinite float where an integer was expected.
    NotFinite,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongType { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            Self::EmptyUri => write!(f, "URI is empty"),
            Self::MalformedUri(uri) => write!(f, "malformed URI: {:?}", uri),
            Self::Fractional(v) => write!(f, "fractional value {} for integer field", v),
            Self::Negative(v) => write!(f, "negative value {} for unsigned field", v),
            Self::OutOfRange => write!(f, "value out of range"),
            Self::NotFinite => write!(f, "non-finite number"),
        }
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// WampError
// ---------------------------------------------------------------------------

/// Errors produced by the catalog and the codec.
#[derive(Debug, Clone, PartialEq)]
pub enum WampError {
    /// A message type with this numeric code is already registered.
    DuplicateCode(u64),
    /// A message type with this name is already registered.
    DuplicateName(String),
    /// Field list violates the layout rules (duplicate field, required after optional).
    InvalidSchema(String),
    /// Encode was asked for a message code the catalog does not know.
    UnknownMessageType(u64),
    /// Decoded wire value starts with a code the catalog does not know.
    UnknownMessageCode(u64),
    /// Message value carries a field its type does not declare.
    UnknownField(String),
    /// A required field is absent.
    MissingRequiredField(String),
    /// A field value failed validation or coercion.
    InvalidFieldValue {
        field: String,
        reason: ValidationError,
    },
    /// Wire sequence is longer than the message type allows.
    TrailingData { expected: usize, found: usize },
    /// Wire sequence has no elements.
    EmptyMessage,
    /// Wire value is not a sequence.
    NotArray,
    /// Codec configuration is invalid.
    Config(String),
    /// Outer serializer (JSON, MessagePack, CBOR) failed.
    Serialization(String),
}

impl WampError {
    pub(crate) fn invalid(field: impl Into<String>, reason: ValidationError) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            reason,
        }
    }
}

impl fmt::Display for WampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCode(code) => write!(f, "duplicate message code: {}", code),
            Self::DuplicateName(name) => write!(f, "duplicate message type: {}", name),
            Self::InvalidSchema(msg) => write!(f, "invalid schema: {}", msg),
            Self::UnknownMessageType(code) => write!(f, "unknown message type: {}", code),
            Self::UnknownMessageCode(code) => write!(f, "unknown message code: {}", code),
            Self::UnknownField(name) => write!(f, "unknown field: {}", name),
            Self::MissingRequiredField(name) => write!(f, "missing required field: {}", name),
            Self::InvalidFieldValue { field, reason } => {
                write!(f, "invalid value for field {}: {}", field, reason)
            }
            Self::TrailingData { expected, found } => write!(
                f,
                "trailing data: expected at most {} elements, found {}",
                expected, found
            ),
            Self::EmptyMessage => write!(f, "empty message"),
            Self::NotArray => write!(f, "message is not an array"),
            Self::Config(msg) => write!(f, "config error: {}", msg),
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for WampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFieldValue { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            WampError::MissingRequiredField("realm".into()).to_string(),
            "missing required field: realm"
        );
        assert_eq!(
            WampError::UnknownMessageCode(99).to_string(),
            "unknown message code: 99"
        );
        assert_eq!(
            WampError::TrailingData {
                expected: 3,
                found: 4
            }
            .to_string(),
            "trailing data: expected at most 3 elements, found 4"
        );
    }

    #[test]
    fn test_invalid_field_exposes_source() {
        let err = WampError::invalid("request_id", ValidationError::Negative(-1));
        assert_eq!(
            err.to_string(),
            "invalid value for field request_id: negative value -1 for unsigned field"
        );
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("negative value -1 for unsigned field")
        );
    }
}
