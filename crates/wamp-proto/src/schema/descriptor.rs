// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-message-type schema.

use std::collections::HashSet;

use super::field::FieldDescriptor;
use crate::error::WampError;

/// Schema of one message type: its name, numeric code and ordered fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MessageTypeDescriptor {
    /// Type name (e.g. `Hello`).
    pub type_name: String,
    /// WAMP message code (e.g. 1 for HELLO).
    pub numeric_code: u64,
    /// Fields ordered by position; positions are dense from 0.
    pub fields: Vec<FieldDescriptor>,
}

impl MessageTypeDescriptor {
    /// Build a descriptor, assigning positions in list order.
    ///
    /// Rejects duplicate field names, a required field after an optional
    /// one, and optional fields whose default fails their own validation.
    /// Defaults are stored in canonical form.
    pub(crate) fn new(
        type_name: &str,
        numeric_code: u64,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self, WampError> {
        let mut seen = HashSet::new();
        let mut optional_seen: Option<String> = None;
        let mut positioned = Vec::with_capacity(fields.len());

        for (position, mut field) in fields.into_iter().enumerate() {
            if !seen.insert(field.name.clone()) {
                return Err(WampError::InvalidSchema(format!(
                    "{}: duplicate field '{}'",
                    type_name, field.name
                )));
            }

            if field.required {
                if let Some(optional) = &optional_seen {
                    return Err(WampError::InvalidSchema(format!(
                        "{}: required field '{}' follows optional field '{}'",
                        type_name, field.name, optional
                    )));
                }
            } else {
                field.default = field.coerce(&field.default).map_err(|reason| {
                    WampError::InvalidSchema(format!(
                        "{}: default of '{}' is invalid: {}",
                        type_name, field.name, reason
                    ))
                })?;
                optional_seen.get_or_insert_with(|| field.name.clone());
            }

            positioned.push(field.with_position(position));
        }

        Ok(Self {
            type_name: type_name.to_string(),
            numeric_code,
            fields: positioned,
        })
    }

    /// Find field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Position of a field by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field(name).map(|f| f.position)
    }

    /// Number of required fields (always a prefix of `fields`).
    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }

    /// Shortest valid wire sequence, code included.
    pub fn min_wire_len(&self) -> usize {
        1 + self.required_count()
    }

    /// Longest valid wire sequence, code included.
    pub fn max_wire_len(&self) -> usize {
        1 + self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use crate::value::Value;

    fn hello_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("realm", FieldKind::Uri),
            FieldDescriptor::new("details", FieldKind::Dict).optional(),
        ]
    }

    #[test]
    fn test_positions_follow_list_order() {
        let desc = MessageTypeDescriptor::new("Hello", 1, hello_fields()).unwrap();
        assert_eq!(desc.field_index("realm"), Some(0));
        assert_eq!(desc.field_index("details"), Some(1));
        assert_eq!(desc.field_index("nope"), None);
        assert_eq!(desc.required_count(), 1);
        assert_eq!(desc.min_wire_len(), 2);
        assert_eq!(desc.max_wire_len(), 3);
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let fields = vec![
            FieldDescriptor::new("realm", FieldKind::Uri),
            FieldDescriptor::new("realm", FieldKind::Dict),
        ];
        let err = MessageTypeDescriptor::new("Hello", 1, fields).unwrap_err();
        assert!(matches!(err, WampError::InvalidSchema(_)));
    }

    #[test]
    fn test_required_after_optional_rejected() {
        let fields = vec![
            FieldDescriptor::new("details", FieldKind::Dict).optional(),
            FieldDescriptor::new("realm", FieldKind::Uri),
        ];
        let err = MessageTypeDescriptor::new("Broken", 900, fields).unwrap_err();
        assert_eq!(
            err,
            WampError::InvalidSchema(
                "Broken: required field 'realm' follows optional field 'details'".into()
            )
        );
    }

    #[test]
    fn test_default_is_canonicalized() {
        let fields = vec![FieldDescriptor::new("id", FieldKind::Id)
            .optional()
            .with_default(Value::Float(5.0))];
        let desc = MessageTypeDescriptor::new("Custom", 901, fields).unwrap();
        assert_eq!(desc.fields[0].default, Value::UInteger(5));
    }

    #[test]
    fn test_invalid_default_rejected() {
        let fields = vec![FieldDescriptor::new("args", FieldKind::List)
            .optional()
            .with_default("not a list")];
        assert!(matches!(
            MessageTypeDescriptor::new("Custom", 902, fields),
            Err(WampError::InvalidSchema(_))
        ));
    }
}
