// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Outer serializers: bytes to [`Value`] and back.
//!
//! | Serializer | Subprotocol      | Feature   | Crate        |
//! |------------|------------------|-----------|--------------|
//! | JSON       | `wamp.2.json`    | `json`    | `serde_json` |
//! | MessagePack| `wamp.2.msgpack` | `msgpack` | `rmpv`       |
//! | CBOR       | `wamp.2.cbor`    | `cbor`    | `ciborium`   |
//!
//! Map keys must be strings. Binary, extension and tagged values have no
//! [`Value`] form and are rejected.

#[cfg(feature = "cbor")]
pub mod cbor;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "msgpack")]
pub mod msgpack;

use crate::config::{WAMP_SUBPROTOCOL_CBOR, WAMP_SUBPROTOCOL_JSON, WAMP_SUBPROTOCOL_MSGPACK};
use crate::error::WampError;
use crate::value::Value;

/// WAMP serializer selected by WebSocket subprotocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Serializer {
    Json,
    MsgPack,
    Cbor,
}

impl Serializer {
    /// All serializers, compiled in or not.
    pub const ALL: [Serializer; 3] = [Serializer::Json, Serializer::MsgPack, Serializer::Cbor];

    /// WebSocket subprotocol name.
    pub fn subprotocol(self) -> &'static str {
        match self {
            Self::Json => WAMP_SUBPROTOCOL_JSON,
            Self::MsgPack => WAMP_SUBPROTOCOL_MSGPACK,
            Self::Cbor => WAMP_SUBPROTOCOL_CBOR,
        }
    }

    /// Serializer for a subprotocol name.
    pub fn from_subprotocol(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.subprotocol() == name)
    }

    /// True if the backing feature is enabled.
    pub fn is_available(self) -> bool {
        match self {
            Self::Json => cfg!(feature = "json"),
            Self::MsgPack => cfg!(feature = "msgpack"),
            Self::Cbor => cfg!(feature = "cbor"),
        }
    }

    /// Serialize a value to bytes.
    pub fn serialize(self, value: &Value) -> Result<Vec<u8>, WampError> {
        match self {
            #[cfg(feature = "json")]
            Self::Json => json::to_vec(value),
            #[cfg(feature = "msgpack")]
            Self::MsgPack => msgpack::to_vec(value),
            #[cfg(feature = "cbor")]
            Self::Cbor => cbor::to_vec(value),
            #[allow(unreachable_patterns)]
            other => Err(other.unavailable()),
        }
    }

    /// Parse bytes into a value. The whole input must be consumed.
    pub fn deserialize(self, bytes: &[u8]) -> Result<Value, WampError> {
        match self {
            #[cfg(feature = "json")]
            Self::Json => json::from_slice(bytes),
            #[cfg(feature = "msgpack")]
            Self::MsgPack => msgpack::from_slice(bytes),
            #[cfg(feature = "cbor")]
            Self::Cbor => cbor::from_slice(bytes),
            #[allow(unreachable_patterns)]
            other => Err(other.unavailable()),
        }
    }

    #[allow(dead_code)]
    fn unavailable(self) -> WampError {
        WampError::Serialization(format!(
            "{} support is not compiled in",
            self.subprotocol()
        ))
    }
}
