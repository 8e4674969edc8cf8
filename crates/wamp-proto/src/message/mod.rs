// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message values.
//!
//! - [`MessageValue`]: dynamic form, a code plus named fields; what the
//!   codec produces and consumes.
//! - [`Message`]: typed form, one struct per WAMP message type.
//!
//! The `Result` and `Error` structs here are the WAMP RESULT and ERROR
//! messages; they shadow the prelude names inside this module only.

mod types;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::schema::{catalog, MessageTypeDescriptor};
use crate::value::Value;

pub use types::{
    Abort, Authenticate, Call, Cancel, Challenge, Error, Event, FieldType, Goodbye, Hello,
    Interrupt, Invocation, Message, MessageType, Publish, Published, Register, Registered,
    Result, Subscribe, Subscribed, Unregister, Unregistered, Unsubscribe, Unsubscribed, Welcome,
    Yield,
};

pub(crate) use types::register_standard;

/// A message as named fields, tagged with its numeric code.
///
/// Values decoded through a custom catalog remember that catalog's type name
/// and hidden fields for `Debug` output. Everything else is rendered against
/// the process-wide catalog.
#[derive(Clone, Default)]
pub struct MessageValue {
    code: u64,
    fields: BTreeMap<String, Value>,
    layout: Option<DebugLayout>,
}

/// Type name and hidden field names of a non-standard descriptor.
#[derive(Debug, Clone, Default)]
struct DebugLayout {
    type_name: String,
    hidden: BTreeSet<String>,
}

impl MessageValue {
    /// Empty value for a standard message type.
    pub fn new(message_type: MessageType) -> Self {
        Self::with_code(message_type.code())
    }

    /// Empty value for an arbitrary code (custom catalogs).
    pub fn with_code(code: u64) -> Self {
        Self {
            code,
            fields: BTreeMap::new(),
            layout: None,
        }
    }

    /// Set a field, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a field in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Numeric message code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Standard message type for this code, if any.
    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::from_code(self.code)
    }

    /// Field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All fields.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Consume the value, keeping only its fields.
    pub fn into_fields(self) -> BTreeMap<String, Value> {
        self.fields
    }

    pub(crate) fn from_parts(code: u64, fields: BTreeMap<String, Value>) -> Self {
        Self {
            code,
            fields,
            layout: None,
        }
    }

    /// Render `Debug` output against `descriptor` instead of the
    /// process-wide catalog.
    pub(crate) fn with_layout(mut self, descriptor: &MessageTypeDescriptor) -> Self {
        self.layout = Some(DebugLayout {
            type_name: descriptor.type_name.clone(),
            hidden: descriptor
                .fields
                .iter()
                .filter(|f| f.hidden_in_debug)
                .map(|f| f.name.clone())
                .collect(),
        });
        self
    }

    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        hidden: impl Fn(&str) -> bool,
    ) -> fmt::Result {
        let mut out = f.debug_struct(name);
        out.field("code", &self.code);
        for (field, value) in &self.fields {
            if hidden(field) {
                out.field(field, &format_args!("<hidden>"));
            } else {
                out.field(field, value);
            }
        }
        out.finish()
    }
}

// Debug layout is presentation only.
impl PartialEq for MessageValue {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.fields == other.fields
    }
}

impl fmt::Debug for MessageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(layout) = &self.layout {
            return self.render(f, &layout.type_name, |field| layout.hidden.contains(field));
        }
        let descriptor = catalog().lookup_by_code(self.code);
        let name = descriptor.map_or("MessageValue", |d| d.type_name.as_str());
        self.render(f, name, |field| {
            descriptor
                .and_then(|d| d.field(field))
                .is_some_and(|fd| fd.hidden_in_debug)
        })
    }
}
