// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Positional wire codec.
//!
//! A WAMP message on the wire is a sequence `[code, field_1, field_2, ...]`.
//! The codec maps between that sequence and a [`MessageValue`] using the
//! field layout recorded in a [`Catalog`]. Bytes are the serializer's job;
//! the codec only sees parsed [`Value`] trees.

use std::collections::BTreeMap;

use crate::config::{CodecConfig, MAX_ID};
use crate::error::{ValidationError, WampError};
use crate::message::{Message, MessageValue};
use crate::schema::{catalog, Catalog, FieldDescriptor, FieldKind, MessageTypeDescriptor};
use crate::value::Value;


/// Encoder/decoder bound to a catalog.
///
/// Stateless apart from its configuration; share freely across threads.
#[derive(Debug, Clone)]
pub struct Codec<'c> {
    catalog: &'c Catalog,
    config: CodecConfig,
}

impl Codec<'static> {
    /// Codec over the standard WAMP catalog with default configuration.
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }
}

impl Default for Codec<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c> Codec<'c> {
    /// Codec over a custom catalog.
    pub fn with_catalog(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            config: CodecConfig::default(),
        }
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: CodecConfig) -> Result<Self, WampError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Catalog this codec resolves codes against.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a message into its wire sequence.
    ///
    /// Absent optional fields are written with their default. With
    /// `omit_trailing_defaults`, trailing optional fields equal to their
    /// default are dropped.
    pub fn encode(&self, message: &MessageValue) -> Result<Value, WampError> {
        self.encode_inner(message).inspect_err(|err| {
            log::debug!("[codec] encode of code {} failed: {}", message.code(), err);
        })
    }

    /// Decode a wire value, which must be a sequence.
    pub fn decode(&self, wire: &Value) -> Result<MessageValue, WampError> {
        match wire.as_list() {
            Some(elements) => self.decode_slice(elements),
            None => {
                log::debug!("[codec] decode rejected {} (not an array)", wire.kind_name());
                Err(WampError::NotArray)
            }
        }
    }

    /// Decode a wire sequence.
    pub fn decode_slice(&self, elements: &[Value]) -> Result<MessageValue, WampError> {
        self.decode_inner(elements).inspect_err(|err| {
            log::debug!(
                "[codec] decode of {}-element message failed: {}",
                elements.len(),
                err
            );
        })
    }

    /// Encode a typed message.
    pub fn encode_message(&self, message: &Message) -> Result<Value, WampError> {
        self.encode(&MessageValue::from(message.clone()))
    }

    /// Decode straight into a typed message.
    pub fn decode_message(&self, wire: &Value) -> Result<Message, WampError> {
        Message::try_from(self.decode(wire)?)
    }

    fn encode_inner(&self, message: &MessageValue) -> Result<Value, WampError> {
        let descriptor = self
            .catalog
            .lookup_by_code(message.code())
            .ok_or(WampError::UnknownMessageType(message.code()))?;

        if let Some(unknown) = message.fields().keys().find(|name| descriptor.field(name).is_none()) {
            return Err(WampError::UnknownField(unknown.clone()));
        }

        let mut wire = Vec::with_capacity(descriptor.max_wire_len());
        wire.push(Value::UInteger(descriptor.numeric_code));
        // Length of the wire prefix that must be kept.
        let mut keep = wire.len();

        for field in &descriptor.fields {
            let value = match message.get(&field.name) {
                Some(value) => self.check_field(field, value)?,
                None if field.required => {
                    return Err(WampError::MissingRequiredField(field.name.clone()))
                }
                None => field.default.clone(),
            };
            let significant = field.required || value != field.default;
            wire.push(value);
            if significant {
                keep = wire.len();
            }
        }

        if self.config.omit_trailing_defaults {
            wire.truncate(keep);
        }
        Ok(Value::List(wire))
    }

    fn decode_inner(&self, elements: &[Value]) -> Result<MessageValue, WampError> {
        let (first, rest) = elements.split_first().ok_or(WampError::EmptyMessage)?;
        let code = read_code(first)?;
        let descriptor = self
            .catalog
            .lookup_by_code(code)
            .ok_or(WampError::UnknownMessageCode(code))?;

        let mut fields = BTreeMap::new();
        for field in &descriptor.fields {
            let value = match rest.get(field.position) {
                Some(value) => self.check_field(field, value)?,
                None if field.required => {
                    return Err(WampError::MissingRequiredField(field.name.clone()))
                }
                None => field.default.clone(),
            };
            fields.insert(field.name.clone(), value);
        }

        check_length(descriptor, elements.len())?;
        let message = MessageValue::from_parts(code, fields);
        if std::ptr::eq(self.catalog, catalog()) {
            Ok(message)
        } else {
            Ok(message.with_layout(descriptor))
        }
    }

    /// Validate one field value and return its canonical form.
    fn check_field(&self, field: &FieldDescriptor, value: &Value) -> Result<Value, WampError> {
        if value.exceeds_depth(self.config.max_depth) {
            return Err(WampError::invalid(&field.name, ValidationError::OutOfRange));
        }

        let value = field
            .coerce(value)
            .map_err(|reason| WampError::invalid(&field.name, reason))?;

        if self.config.strict_ids && field.kind == FieldKind::Id {
            if let Some(id) = value.as_u64() {
                if id > MAX_ID {
                    return Err(WampError::invalid(&field.name, ValidationError::OutOfRange));
                }
            }
        }
        Ok(value)
    }
}

fn read_code(element: &Value) -> Result<u64, WampError> {
    match FieldKind::Code.coerce(element) {
        Ok(Value::UInteger(code)) => Ok(code),
        Ok(other) => Err(WampError::invalid(
            "code",
            ValidationError::WrongType {
                expected: "unsigned integer",
                found: other.kind_name(),
            },
        )),
        Err(reason) => Err(WampError::invalid("code", reason)),
    }
}

fn check_length(descriptor: &MessageTypeDescriptor, found: usize) -> Result<(), WampError> {
    let expected = descriptor.max_wire_len();
    if found > expected {
        return Err(WampError::TrailingData { expected, found });
    }
    Ok(())
}

/// Encode with the default codec.
pub fn encode(message: &MessageValue) -> Result<Value, WampError> {
    Codec::new().encode(message)
}

/// Decode with the default codec.
pub fn decode(wire: &Value) -> Result<MessageValue, WampError> {
    Codec::new().decode(wire)
}

/// Encode a typed message with the default codec.
pub fn encode_message(message: &Message) -> Result<Value, WampError> {
    Codec::new().encode_message(message)
}

/// Decode into a typed message with the default codec.
pub fn decode_message(wire: &Value) -> Result<Message, WampError> {
    Codec::new().decode_message(wire)
}
