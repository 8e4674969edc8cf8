// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The WAMP v2 message table and the typed messages generated from it.
//!
//! `wamp_messages!` takes the table once and expands into the
//! [`MessageType`] tag, one struct per message, the [`Message`] enum, the
//! conversions to and from [`MessageValue`], and the catalog registration.

use std::collections::BTreeMap;
use std::fmt;

use super::MessageValue;
use crate::error::{ValidationError, WampError};
use crate::schema::{catalog, Catalog, FieldDescriptor, FieldKind, MessageTypeDescriptor};
use crate::value::{Dict, List, Value};

// ---------------------------------------------------------------------------
// Field types
// ---------------------------------------------------------------------------

/// Rust representation of a field kind inside typed messages.
///
/// URI and STRING map to `String`, ID and CODE to `u64`, DICT to [`Dict`],
/// LIST to [`List`].
pub trait FieldType: Sized {
    /// Wire shape name used in error reports.
    const EXPECTED: &'static str;

    /// Extract from a canonical value; `None` on shape mismatch.
    fn from_value(value: Value) -> Option<Self>;

    /// Convert back into a wire value.
    fn into_value(self) -> Value;
}

impl FieldType for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl FieldType for u64 {
    const EXPECTED: &'static str = "unsigned integer";

    fn from_value(value: Value) -> Option<Self> {
        value.as_u64()
    }

    fn into_value(self) -> Value {
        Value::UInteger(self)
    }
}

impl FieldType for Dict {
    const EXPECTED: &'static str = "dict";

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Dict(self)
    }
}

impl FieldType for List {
    const EXPECTED: &'static str = "list";

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::List(self)
    }
}

macro_rules! field_type {
    (Uri) => { ::std::string::String };
    (String) => { ::std::string::String };
    (Id) => { u64 };
    (Code) => { u64 };
    (Dict) => { $crate::value::Dict };
    (List) => { $crate::value::List };
}

/// Remove one field from a dynamic message, filling in the default when an
/// optional field is absent.
fn take_field<T: FieldType>(
    fields: &mut BTreeMap<String, Value>,
    descriptor: &MessageTypeDescriptor,
    name: &str,
) -> std::result::Result<T, WampError> {
    let field = descriptor
        .field(name)
        .ok_or_else(|| WampError::UnknownField(name.to_string()))?;

    let value = match fields.remove(name) {
        Some(value) => field
            .coerce(&value)
            .map_err(|reason| WampError::invalid(name, reason))?,
        None if field.required => return Err(WampError::MissingRequiredField(name.to_string())),
        None => field.default.clone(),
    };

    let found = value.kind_name();
    T::from_value(value).ok_or_else(|| {
        WampError::invalid(
            name,
            ValidationError::WrongType {
                expected: T::EXPECTED,
                found,
            },
        )
    })
}

fn is_hidden(descriptor: Option<&MessageTypeDescriptor>, field: &str) -> bool {
    descriptor
        .and_then(|d| d.field(field))
        .is_some_and(|f| f.hidden_in_debug)
}

fn code_mismatch(expected: &'static str, code: u64) -> WampError {
    let found = MessageType::from_code(code).map_or("unknown message type", MessageType::name);
    WampError::invalid("code", ValidationError::WrongType { expected, found })
}

// ---------------------------------------------------------------------------
// Table expansion
// ---------------------------------------------------------------------------

macro_rules! wamp_messages {
    ($(
        $(#[$meta:meta])*
        $name:ident = $code:literal {
            $( $field:ident : $kind:ident $( [ $($flag:ident),+ ] )? ),* $(,)?
        }
    )+) => {
        /// Tag of a standard WAMP message type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum MessageType {
            $( $name, )+
        }

        impl MessageType {
            /// Every standard message type, by ascending code.
            pub const ALL: &'static [MessageType] = &[ $( MessageType::$name, )+ ];

            /// WAMP message code.
            pub fn code(self) -> u64 {
                match self {
                    $( MessageType::$name => $code, )+
                }
            }

            /// Type name as registered in the catalog.
            pub fn name(self) -> &'static str {
                match self {
                    $( MessageType::$name => stringify!($name), )+
                }
            }

            /// Message type for a code, if standard.
            pub fn from_code(code: u64) -> Option<Self> {
                match code {
                    $( $code => Some(MessageType::$name), )+
                    _ => None,
                }
            }

            /// Message type for a name (case-sensitive).
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( stringify!($name) => Some(MessageType::$name), )+
                    _ => None,
                }
            }
        }

        $(
            $(#[$meta])*
            #[derive(Clone, PartialEq, Default)]
            pub struct $name {
                $( pub $field: field_type!($kind), )*
            }

            impl $name {
                /// WAMP message code.
                pub const CODE: u64 = $code;

                fn field_descriptors() -> Vec<FieldDescriptor> {
                    vec![
                        $(
                            FieldDescriptor::new(stringify!($field), FieldKind::$kind)
                                $( $( .$flag() )+ )?
                        ),*
                    ]
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let descriptor = catalog().lookup_by_code($code);
                    let mut out = f.debug_struct(stringify!($name));
                    $(
                        if is_hidden(descriptor, stringify!($field)) {
                            out.field(stringify!($field), &format_args!("<hidden>"));
                        } else {
                            out.field(stringify!($field), &self.$field);
                        }
                    )*
                    out.finish()
                }
            }

            impl From<$name> for MessageValue {
                fn from(msg: $name) -> Self {
                    MessageValue::new(MessageType::$name)
                        $( .with(stringify!($field), FieldType::into_value(msg.$field)) )*
                }
            }

            impl TryFrom<MessageValue> for $name {
                type Error = WampError;

                fn try_from(value: MessageValue) -> std::result::Result<Self, WampError> {
                    if value.code() != $code {
                        return Err(code_mismatch(stringify!($name), value.code()));
                    }
                    let descriptor = catalog()
                        .lookup_by_code($code)
                        .ok_or(WampError::UnknownMessageType($code))?;

                    let mut fields = value.into_fields();
                    let msg = Self {
                        $( $field: take_field(&mut fields, descriptor, stringify!($field))?, )*
                    };
                    if let Some(extra) = fields.into_keys().next() {
                        return Err(WampError::UnknownField(extra));
                    }
                    Ok(msg)
                }
            }

            impl From<$name> for Message {
                fn from(msg: $name) -> Self {
                    Message::$name(msg)
                }
            }
        )+

        /// A typed WAMP message.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Message {
            $( $name($name), )+
        }

        impl Message {
            /// Tag of this message.
            pub fn message_type(&self) -> MessageType {
                match self {
                    $( Message::$name(_) => MessageType::$name, )+
                }
            }

            /// WAMP message code.
            pub fn code(&self) -> u64 {
                self.message_type().code()
            }
        }

        impl From<Message> for MessageValue {
            fn from(msg: Message) -> Self {
                match msg {
                    $( Message::$name(m) => m.into(), )+
                }
            }
        }

        impl TryFrom<MessageValue> for Message {
            type Error = WampError;

            fn try_from(value: MessageValue) -> std::result::Result<Self, WampError> {
                match value.message_type() {
                    $( Some(MessageType::$name) => $name::try_from(value).map(Message::$name), )+
                    None => Err(WampError::UnknownMessageCode(value.code())),
                }
            }
        }

        /// Register every standard message type.
        pub(crate) fn register_standard(
            catalog: &mut Catalog,
        ) -> std::result::Result<(), WampError> {
            $( catalog.register(stringify!($name), $code, $name::field_descriptors())?; )+
            Ok(())
        }
    };
}

wamp_messages! {
    /// HELLO: open a session on a realm.
    Hello = 1 { realm: Uri, details: Dict [optional] }
    /// WELCOME: session established.
    Welcome = 2 { session_id: Id, details: Dict }
    /// ABORT: session setup refused.
    Abort = 3 { details: Dict, reason: Uri }
    /// CHALLENGE: router asks for authentication.
    Challenge = 4 { auth_method: String, extra: Dict [optional] }
    /// AUTHENTICATE: answer to a challenge. The signature never appears in
    /// debug output.
    Authenticate = 5 { signature: String [hidden], extra: Dict [optional] }
    /// GOODBYE: session close.
    Goodbye = 6 { details: Dict, reason: Uri }
    /// ERROR: failure reply to a request.
    Error = 8 {
        request_code: Code,
        request_id: Id,
        details: Dict,
        error: Uri,
        args: List [optional],
        kwargs: Dict [optional],
    }
    /// PUBLISH
    Publish = 16 {
        request_id: Id,
        options: Dict,
        topic: Uri,
        args: List [optional],
        kwargs: Dict [optional],
    }
    /// PUBLISHED
    Published = 17 { request_id: Id, publication_id: Id }
    /// SUBSCRIBE
    Subscribe = 32 { request_id: Id, options: Dict, topic: Uri }
    /// SUBSCRIBED
    Subscribed = 33 { request_id: Id, subscription_id: Id }
    /// UNSUBSCRIBE
    Unsubscribe = 34 { request_id: Id, subscription_id: Id }
    /// UNSUBSCRIBED
    Unsubscribed = 35 { request_id: Id }
    /// EVENT: publication delivered to a subscriber.
    Event = 36 {
        subscription_id: Id,
        publication_id: Id,
        details: Dict,
        args: List [optional],
        kwargs: Dict [optional],
    }
    /// CALL
    Call = 48 {
        request_id: Id,
        options: Dict,
        procedure: Uri,
        args: List [optional],
        kwargs: Dict [optional],
    }
    /// CANCEL: caller gives up on a pending call.
    Cancel = 49 { request_id: Id, options: Dict [optional] }
    /// RESULT: reply to a call.
    Result = 50 {
        request_id: Id,
        details: Dict,
        args: List [optional],
        kwargs: Dict [optional],
    }
    /// REGISTER
    Register = 64 { request_id: Id, options: Dict, procedure: Uri }
    /// REGISTERED
    Registered = 65 { request_id: Id, registration_id: Id }
    /// UNREGISTER
    Unregister = 66 { request_id: Id, registration_id: Id }
    /// UNREGISTERED
    Unregistered = 67 { request_id: Id }
    /// INVOCATION: router forwards a call to the callee.
    Invocation = 68 {
        request_id: Id,
        registration_id: Id,
        details: Dict,
        args: List [optional],
        kwargs: Dict [optional],
    }
    /// INTERRUPT: router cancels an invocation.
    Interrupt = 69 { request_id: Id, options: Dict [optional] }
    /// YIELD: callee result for an invocation.
    Yield = 70 {
        request_id: Id,
        options: Dict,
        args: List [optional],
        kwargs: Dict [optional],
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Message {
    /// Request ID, for message types that carry one.
    pub fn request_id(&self) -> Option<u64> {
        match self {
            Message::Error(m) => Some(m.request_id),
            Message::Publish(m) => Some(m.request_id),
            Message::Published(m) => Some(m.request_id),
            Message::Subscribe(m) => Some(m.request_id),
            Message::Subscribed(m) => Some(m.request_id),
            Message::Unsubscribe(m) => Some(m.request_id),
            Message::Unsubscribed(m) => Some(m.request_id),
            Message::Call(m) => Some(m.request_id),
            Message::Cancel(m) => Some(m.request_id),
            Message::Result(m) => Some(m.request_id),
            Message::Register(m) => Some(m.request_id),
            Message::Registered(m) => Some(m.request_id),
            Message::Unregister(m) => Some(m.request_id),
            Message::Unregistered(m) => Some(m.request_id),
            Message::Invocation(m) => Some(m.request_id),
            Message::Interrupt(m) => Some(m.request_id),
            Message::Yield(m) => Some(m.request_id),
            Message::Hello(_)
            | Message::Welcome(_)
            | Message::Abort(_)
            | Message::Challenge(_)
            | Message::Authenticate(_)
            | Message::Goodbye(_)
            | Message::Event(_) => None,
        }
    }
}
