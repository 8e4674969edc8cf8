// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Cross-type field queries over a [`Catalog`].

use std::collections::BTreeSet;
use std::fmt;

use super::catalog::Catalog;

/// Where a field appears in one message type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FieldUsage {
    /// Message type carrying the field.
    pub type_name: String,
    /// Code of that message type.
    pub numeric_code: u64,
    /// 0-based field position.
    pub position: usize,
    /// Whether decoding requires the field.
    pub required: bool,
    /// Whether `Debug` output redacts the field.
    pub hidden_in_debug: bool,
}

impl FieldUsage {
    /// Index in the wire sequence (code at 0).
    pub fn wire_index(&self) -> usize {
        self.position + 1
    }
}

/// Every field name in a catalog, with the types that carry it.
///
/// Names are listed in order of first appearance when walking the catalog
/// by ascending code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndex {
    entries: Vec<(String, Vec<FieldUsage>)>,
}

impl FieldIndex {
    /// Usages of one field name.
    pub fn get(&self, name: &str) -> Option<&[FieldUsage]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, usages)| usages.as_slice())
    }

    /// Iterate `(field name, usages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldUsage])> {
        self.entries
            .iter()
            .map(|(name, usages)| (name.as_str(), usages.as_slice()))
    }

    /// Number of distinct field names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for an empty catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One block per field name:
///
/// ```text
/// realm
///  - Hello: 1
///  - Welcome: 2
/// ```
///
/// The number is the wire index; `*` marks an optional field and `!` a field
/// hidden from debug output.
impl fmt::Display for FieldIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, usages)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", name)?;
            for usage in usages {
                write!(f, " - {}: {}", usage.type_name, usage.wire_index())?;
                if !usage.required {
                    write!(f, " *")?;
                }
                if usage.hidden_in_debug {
                    write!(f, " !")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Catalog {
    /// All message types that declare a field called `name`, by ascending code.
    pub fn types_with_field(&self, name: &str) -> Vec<FieldUsage> {
        self.iter()
            .filter_map(|desc| {
                desc.field(name).map(|field| FieldUsage {
                    type_name: desc.type_name.clone(),
                    numeric_code: desc.numeric_code,
                    position: field.position,
                    required: field.required,
                    hidden_in_debug: field.hidden_in_debug,
                })
            })
            .collect()
    }

    /// Every field name used by any message type, sorted and distinct.
    pub fn field_names(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .iter()
            .flat_map(|desc| desc.fields.iter().map(|f| f.name.as_str()))
            .collect();
        names.into_iter().collect()
    }

    /// Position of `field` within `type_name`.
    pub fn field_position(&self, type_name: &str, field: &str) -> Option<usize> {
        self.lookup_by_name(type_name)?.field_index(field)
    }

    /// Build the full field-name index.
    pub fn field_index(&self) -> FieldIndex {
        let mut index = FieldIndex::default();
        for desc in self.iter() {
            for field in &desc.fields {
                let usage = FieldUsage {
                    type_name: desc.type_name.clone(),
                    numeric_code: desc.numeric_code,
                    position: field.position,
                    required: field.required,
                    hidden_in_debug: field.hidden_in_debug,
                };
                match index.entries.iter_mut().find(|(n, _)| *n == field.name) {
                    Some((_, usages)) => usages.push(usage),
                    None => index.entries.push((field.name.clone(), vec![usage])),
                }
            }
        }
        index
    }
}
