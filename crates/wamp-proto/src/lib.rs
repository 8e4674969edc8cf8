// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # wamp-proto - WAMP message catalog and positional wire codec
//!
//! Every WAMP v2 message travels as a positional sequence
//! `[code, field_1, field_2, ...]`. This crate knows the layout of each
//! message type and converts between that sequence and named fields, with
//! validation of every field against its kind.
//!
//! ## Quick Start
//!
//! ```rust
//! use wamp_proto::{wamp_value, Codec, MessageType, MessageValue, Result};
//!
//! fn main() -> Result<()> {
//!     let codec = Codec::new();
//!
//!     // Named fields -> wire sequence
//!     let hello = MessageValue::new(MessageType::Hello).with("realm", "realm1");
//!     let wire = codec.encode(&hello)?;
//!     assert_eq!(wire, wamp_value!([1, "realm1", {}]));
//!
//!     // Wire sequence -> named fields
//!     let decoded = codec.decode(&wamp_value!([1, "realm1"]))?;
//!     assert_eq!(decoded.get("details"), Some(&wamp_proto::Value::dict()));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |   bytes  <-- serializer (JSON | MessagePack | CBOR) -->  Value      |
//! +---------------------------------------------------------------------+
//! |   Value (list)  <-- Codec (encode / decode) -->  MessageValue       |
//! +---------------------------------------------------------------------+
//! |   MessageValue  <-- TryFrom / From -->  Message (typed structs)     |
//! +---------------------------------------------------------------------+
//! |   Catalog: code -> MessageTypeDescriptor -> FieldDescriptor[]       |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Catalog`] | Registry of message types, built once and read-only after |
//! | [`Codec`] | Positional encode/decode against a catalog |
//! | [`MessageValue`] | Dynamic message: code plus named fields |
//! | [`Message`] | Typed message, one struct per WAMP message type |
//! | [`Value`] | Dynamic wire value handed over by the serializer |
//!
//! ## Features
//!
//! - `json` (default): JSON serializer via `serde_json`
//! - `msgpack`: MessagePack serializer via `rmpv`
//! - `cbor`: CBOR serializer via `ciborium`

pub mod codec;
pub mod config;
pub mod error;
pub mod message;
pub mod schema;
pub mod serializer;
pub mod value;

pub use codec::{decode, decode_message, encode, encode_message, Codec};
pub use config::{CodecConfig, MAX_ID};
pub use error::{ValidationError, WampError};
pub use message::{Message, MessageType, MessageValue};
pub use schema::{
    catalog, Catalog, FieldDescriptor, FieldIndex, FieldKind, FieldUsage, MessageTypeDescriptor,
};
pub use serializer::Serializer;
pub use value::{Dict, List, Value};

/// Result type for catalog and codec operations.
pub type Result<T> = std::result::Result<T, WampError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<Catalog>();
        assert_send_sync::<Codec<'static>>();
        assert_send_sync::<Value>();
        assert_send_sync::<MessageValue>();
        assert_send_sync::<Message>();
        assert_send_sync::<WampError>();
    }

    #[test]
    fn test_catalog_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| catalog() as *const Catalog as usize))
            .collect();
        let addrs: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
