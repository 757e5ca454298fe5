//! # Field Catalog
//!
//! The read-only set of data fields a template can bind to. Loaded once at
//! startup and never mutated afterwards.
//!
//! Every catalog contains the sentinel field [`NO_BINDING`] at its head.
//! Binding a slot to it means "static, no data" and resolves to nothing.
//!
//! ```
//! use stencil::fields::{FieldCatalog, FieldValue};
//!
//! let catalog = FieldCatalog::sample();
//! let field = catalog.get("employee_name").unwrap();
//! assert!(matches!(&field.value, FieldValue::Scalar(s) if s == "John Doe"));
//! assert!(catalog.get("none").is_some());
//! ```

mod sample;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Identifier of the sentinel "no binding" field.
pub const NO_BINDING: &str = "none";

/// Errors raised while building a catalog from external data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate field id: {0}")]
    DuplicateId(String),

    #[error("field {id}: table fields require a column list")]
    MissingColumns { id: String },

    #[error("field {id}: value does not match kind {kind:?}: {message}")]
    ValueMismatch {
        id: String,
        kind: ValueKind,
        message: String,
    },

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Value-kind tag of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Scalar,
    List,
    Table,
    Image,
}

/// One source row of a table field, keyed by column name.
pub type TableRow = BTreeMap<String, String>;

/// A field's stored value, shaped by its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
    Table {
        columns: Vec<String>,
        rows: Vec<TableRow>,
    },
    Image(String),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Scalar(_) => ValueKind::Scalar,
            FieldValue::List(_) => ValueKind::List,
            FieldValue::Table { .. } => ValueKind::Table,
            FieldValue::Image(_) => ValueKind::Image,
        }
    }
}

/// A bindable data field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldRecord", into = "FieldRecord")]
pub struct Field {
    pub id: String,
    pub label: String,
    pub value: FieldValue,
}

impl Field {
    pub fn scalar(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: FieldValue::Scalar(value.into()),
        }
    }

    pub fn list(id: impl Into<String>, label: impl Into<String>, items: &[&str]) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: FieldValue::List(items.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn image(id: impl Into<String>, label: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: FieldValue::Image(src.into()),
        }
    }

    pub fn table(
        id: impl Into<String>,
        label: impl Into<String>,
        columns: &[&str],
        rows: Vec<TableRow>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: FieldValue::Table {
                columns: columns.iter().map(|s| s.to_string()).collect(),
                rows,
            },
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Column schema, present only on table fields.
    pub fn columns(&self) -> Option<&[String]> {
        match &self.value {
            FieldValue::Table { columns, .. } => Some(columns),
            _ => None,
        }
    }

    fn sentinel() -> Self {
        Self::scalar(NO_BINDING, "-- No Link (Static) --", "")
    }
}

/// Wire shape of a field: `{id, label, kind, value, columns?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FieldRecord {
    id: String,
    label: String,
    kind: ValueKind,
    #[serde(default)]
    value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    columns: Option<Vec<String>>,
}

impl TryFrom<FieldRecord> for Field {
    type Error = CatalogError;

    fn try_from(record: FieldRecord) -> Result<Self, Self::Error> {
        let FieldRecord {
            id,
            label,
            kind,
            value,
            columns,
        } = record;
        let mismatch = |e: serde_json::Error| CatalogError::ValueMismatch {
            id: id.clone(),
            kind,
            message: e.to_string(),
        };

        // A field without a value (like the sentinel) binds to an empty value.
        let value = match (kind, value) {
            (ValueKind::Scalar, serde_json::Value::Null) => FieldValue::Scalar(String::new()),
            (ValueKind::Scalar, v) => FieldValue::Scalar(serde_json::from_value(v).map_err(mismatch)?),
            (ValueKind::Image, serde_json::Value::Null) => FieldValue::Image(String::new()),
            (ValueKind::Image, v) => FieldValue::Image(serde_json::from_value(v).map_err(mismatch)?),
            (ValueKind::List, serde_json::Value::Null) => FieldValue::List(Vec::new()),
            (ValueKind::List, v) => FieldValue::List(serde_json::from_value(v).map_err(mismatch)?),
            (ValueKind::Table, v) => {
                let columns = columns.ok_or_else(|| CatalogError::MissingColumns { id: id.clone() })?;
                let rows = if v.is_null() {
                    Vec::new()
                } else {
                    serde_json::from_value(v).map_err(mismatch)?
                };
                FieldValue::Table { columns, rows }
            }
        };

        Ok(Field { id, label, value })
    }
}

impl From<Field> for FieldRecord {
    fn from(field: Field) -> Self {
        let kind = field.kind();
        let (value, columns) = match field.value {
            FieldValue::Scalar(s) | FieldValue::Image(s) => (serde_json::Value::String(s), None),
            FieldValue::List(items) => (serde_json::json!(items), None),
            FieldValue::Table { columns, rows } => (serde_json::json!(rows), Some(columns)),
        };
        FieldRecord {
            id: field.id,
            label: field.label,
            kind,
            value,
            columns,
        }
    }
}

/// Immutable, ordered lookup of bindable fields.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    fields: Vec<Field>,
}

impl FieldCatalog {
    /// Build a catalog with the sentinel at its head.
    ///
    /// A caller-supplied [`NO_BINDING`] entry is replaced by the canonical
    /// empty sentinel, so binding to it never yields data.
    pub fn new(fields: Vec<Field>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.id.as_str()) {
                return Err(CatalogError::DuplicateId(field.id.clone()));
            }
        }

        let mut all = Vec::with_capacity(fields.len() + 1);
        all.push(Field::sentinel());
        all.extend(fields.into_iter().filter(|f| f.id != NO_BINDING));
        Ok(Self { fields: all })
    }

    /// The demo data set used when no catalog file is supplied.
    pub fn sample() -> Self {
        Self {
            fields: sample::fields(),
        }
    }

    /// Parse a catalog from a JSON array of field records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let fields: Vec<Field> = serde_json::from_str(json)?;
        Self::new(fields)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn get(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields offered to scalar-like slots (everything except tables).
    pub fn scalar_choices(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.kind() != ValueKind::Table)
    }

    /// Fields offered to table elements.
    pub fn table_choices(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.kind() == ValueKind::Table)
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_inserted_first() {
        let catalog = FieldCatalog::new(vec![Field::scalar("a", "A", "x")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().next().unwrap().id, NO_BINDING);
    }

    #[test]
    fn test_sentinel_not_duplicated() {
        let catalog = FieldCatalog::new(vec![Field::scalar("none", "Nothing", "")]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_supplied_sentinel_replaced() {
        let json = r#"[
            {"id": "a", "label": "A", "kind": "scalar", "value": "x"},
            {"id": "none", "label": "Nothing", "kind": "scalar", "value": "LEAKED"}
        ]"#;
        let catalog = FieldCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let head = catalog.iter().next().unwrap();
        assert_eq!(head.id, NO_BINDING);
        assert_eq!(head, &Field::sentinel());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = FieldCatalog::new(vec![
            Field::scalar("a", "A", "1"),
            Field::scalar("a", "A again", "2"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "name", "label": "Name", "kind": "scalar", "value": "Ada"},
            {"id": "tags", "label": "Tags", "kind": "list", "value": ["x", "y"]},
            {"id": "rows", "label": "Rows", "kind": "table", "columns": ["A"], "value": [{"A": "1"}]},
            {"id": "pic", "label": "Pic", "kind": "image", "value": "data:image/png;base64,AA=="}
        ]"#;
        let catalog = FieldCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get("tags").unwrap().kind(), ValueKind::List);
        assert_eq!(
            catalog.get("rows").unwrap().columns(),
            Some(&["A".to_string()][..])
        );
    }

    #[test]
    fn test_table_without_columns_rejected() {
        let json = r#"[{"id": "t", "label": "T", "kind": "table", "value": []}]"#;
        let err = FieldCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumns { .. }));
    }

    #[test]
    fn test_value_mismatch_rejected() {
        let json = r#"[{"id": "l", "label": "L", "kind": "list", "value": "not a list"}]"#;
        let err = FieldCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::ValueMismatch { .. }));
    }

    #[test]
    fn test_choices_split_by_kind() {
        let catalog = FieldCatalog::sample();
        assert!(catalog.scalar_choices().all(|f| f.kind() != ValueKind::Table));
        assert!(catalog.scalar_choices().any(|f| f.id == NO_BINDING));
        let tables: Vec<_> = catalog.table_choices().map(|f| f.id.as_str()).collect();
        assert_eq!(tables, vec!["witness_table"]);
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let catalog = FieldCatalog::sample();
        let json = serde_json::to_string(&catalog).unwrap();
        let reloaded = FieldCatalog::from_json(&json).unwrap();
        assert_eq!(reloaded.len(), catalog.len());
        assert_eq!(reloaded.get("witness_table"), catalog.get("witness_table"));
    }
}
