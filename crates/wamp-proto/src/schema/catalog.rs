// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message catalog: the registry of message type descriptors.
//!
//! A [`Catalog`] is filled once through [`Catalog::register`] and then only
//! read. The process-wide WAMP table lives behind [`Catalog::global`] and is
//! built on first access.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::descriptor::MessageTypeDescriptor;
use super::field::FieldDescriptor;
use crate::error::WampError;

/// Registry of message types, indexed by numeric code and by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Descriptors ordered by numeric code.
    by_code: BTreeMap<u64, MessageTypeDescriptor>,
    /// Type name -> numeric code.
    by_name: HashMap<String, u64>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the standard WAMP v2 message set.
    pub fn wamp() -> Result<Self, WampError> {
        let mut catalog = Self::new();
        crate::message::register_standard(&mut catalog)?;
        Ok(catalog)
    }

    /// Get the process-wide WAMP catalog.
    ///
    /// # Panics
    ///
    /// Panics if the built-in message table is inconsistent.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Catalog::wamp()
                .unwrap_or_else(|err| panic!("built-in WAMP message table rejected: {}", err))
        })
    }

    /// Register a message type.
    ///
    /// Positions are assigned in list order. The call is atomic: on any
    /// error the catalog is left unchanged.
    pub fn register(
        &mut self,
        type_name: &str,
        numeric_code: u64,
        fields: Vec<FieldDescriptor>,
    ) -> Result<&MessageTypeDescriptor, WampError> {
        if self.by_code.contains_key(&numeric_code) {
            log::warn!(
                "[catalog] rejecting {}: code {} already registered",
                type_name,
                numeric_code
            );
            return Err(WampError::DuplicateCode(numeric_code));
        }
        if self.by_name.contains_key(type_name) {
            log::warn!("[catalog] rejecting {}: name already registered", type_name);
            return Err(WampError::DuplicateName(type_name.to_string()));
        }

        let descriptor = MessageTypeDescriptor::new(type_name, numeric_code, fields)
            .inspect_err(|err| log::warn!("[catalog] rejecting {}: {}", type_name, err))?;

        log::debug!(
            "[catalog] registered {} (code={}, fields={})",
            type_name,
            numeric_code,
            descriptor.fields.len()
        );

        self.by_name.insert(type_name.to_string(), numeric_code);
        Ok(self.by_code.entry(numeric_code).or_insert(descriptor))
    }

    /// Look up a message type by numeric code.
    pub fn lookup_by_code(&self, numeric_code: u64) -> Option<&MessageTypeDescriptor> {
        self.by_code.get(&numeric_code)
    }

    /// Look up a message type by name (case-sensitive, e.g. `Hello`).
    pub fn lookup_by_name(&self, type_name: &str) -> Option<&MessageTypeDescriptor> {
        self.by_name
            .get(type_name)
            .and_then(|code| self.by_code.get(code))
    }

    /// Iterate descriptors in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &MessageTypeDescriptor> {
        self.by_code.values()
    }

    /// Number of registered message types.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// Shorthand for [`Catalog::global`].
pub fn catalog() -> &'static Catalog {
    Catalog::global()
}
