//! Binding resolution: field ids to displayable values.
//!
//! `Resolver` handles all catalog lookups so that the property records stay
//! pure data with no knowledge of where sample values come from. Lookups
//! never fail: an absent id, the `"none"` sentinel, or a field of the wrong
//! kind all degrade to an empty value.

use crate::fields::{Field, FieldCatalog, FieldValue, ValueKind};

/// Read-only view of a field catalog used during preview rendering.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a FieldCatalog {
        self.catalog
    }

    /// Resolve a binding to display text.
    ///
    /// Scalars and image references yield their stored string; lists are
    /// joined with `", "`; tables have no scalar form and yield `""`.
    pub fn resolve_scalar(&self, field_id: &str) -> String {
        match self.catalog.get(field_id).map(|f| &f.value) {
            Some(FieldValue::Scalar(s)) | Some(FieldValue::Image(s)) => s.clone(),
            Some(FieldValue::List(items)) => items.join(", "),
            Some(FieldValue::Table { .. }) | None => String::new(),
        }
    }

    /// Resolve a binding to list items; non-list fields yield nothing.
    pub fn resolve_list(&self, field_id: &str) -> &'a [String] {
        match self.catalog.get(field_id).map(|f| &f.value) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    /// Resolve a table binding. A non-table field is treated as not found.
    pub fn resolve_table(&self, field_id: &str) -> Option<&'a Field> {
        self.catalog
            .get(field_id)
            .filter(|f| f.kind() == ValueKind::Table)
    }
}
