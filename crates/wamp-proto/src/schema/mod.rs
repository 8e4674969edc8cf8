// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Message schemas: field kinds, field and type descriptors, the catalog.

mod catalog;
mod descriptor;
mod field;
mod introspect;

pub use catalog::{catalog, Catalog};
pub use descriptor::MessageTypeDescriptor;
pub use field::{FieldDescriptor, FieldKind};
pub use introspect::{FieldIndex, FieldUsage};
