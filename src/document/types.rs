//! Property records for every element kind.
//!
//! Each record is the strongly-typed property bag of one kind. Every key is
//! always present when serialized (optional values serialize as `null`), so
//! the serialized key set of a record *is* the kind's schema.
//!
//! Each record implements [`ElementMeta`] to declare its display label and
//! the default it is instantiated with.

use serde::{Deserialize, Deserializer, Serialize};

use crate::fields::NO_BINDING;

/// Metadata that every property record must provide.
///
/// The label and default live next to each struct definition, so adding a
/// new kind is self-contained: implement this trait, add a line to
/// `define_elements!`, and the compiler points at the remaining matches.
pub trait ElementMeta: Sized {
    /// Human-readable display label (e.g. "Two Column Row").
    fn label() -> &'static str;

    /// Initial property set for a freshly added element.
    fn editor_default() -> Self;
}

fn no_binding() -> String {
    NO_BINDING.to_string()
}

// ============================================================================
// SHARED PIECES
// ============================================================================

/// One labeled, bindable slot of a row-like element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSlot {
    pub label: String,
    /// Field id this slot is bound to (`"none"` for static).
    pub mapping: String,
    /// Hide the label entirely, independent of binding state.
    pub hide_label: bool,
    /// Solid header treatment (no trailing colon) instead of inline `Label:`.
    pub label_as_header: bool,
    /// Place the label above the value instead of beside it.
    pub stacked: bool,
}

impl FieldSlot {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            mapping: no_binding(),
            hide_label: false,
            label_as_header: false,
            stacked: false,
        }
    }

    pub fn bound(label: impl Into<String>, mapping: impl Into<String>) -> Self {
        Self {
            mapping: mapping.into(),
            ..Self::new(label)
        }
    }
}

// ============================================================================
// HEADER KINDS
// ============================================================================

/// Page header with company block on the left and a logo on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainHeader {
    pub company_name: String,
    pub report_title: String,
    pub doc_id: String,
    /// Displayable image reference; `None` renders a placeholder.
    pub logo_url: Option<String>,
}

impl ElementMeta for MainHeader {
    fn label() -> &'static str { "Logo & Title Header" }
    fn editor_default() -> Self {
        Self {
            company_name: "TIMEC Oil & Gas, Inc.".into(),
            report_title: "Preliminary Incident Report".into(),
            doc_id: "TMF-8300-SA-0140".into(),
            logo_url: None,
        }
    }
}

/// Title block without a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub company_name: String,
    pub report_title: String,
    pub doc_id: String,
}

impl ElementMeta for Title {
    fn label() -> &'static str { "Title Header" }
    fn editor_default() -> Self {
        let MainHeader { company_name, report_title, doc_id, .. } = MainHeader::editor_default();
        Self { company_name, report_title, doc_id }
    }
}

/// Colored divider band. The element after it renders flush.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeader {
    pub text: String,
    pub bg_color: String,
    pub text_color: String,
}

impl ElementMeta for SectionHeader {
    fn label() -> &'static str { "Section Header" }
    fn editor_default() -> Self {
        Self {
            text: "SECTION TITLE".into(),
            bg_color: "#004a99".into(),
            text_color: "#ffffff".into(),
        }
    }
}

// ============================================================================
// ROW KINDS
// ============================================================================

/// Full-width single field row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleRow {
    pub field: FieldSlot,
    /// Fixed row height in pixels.
    pub custom_height: Option<u32>,
}

impl ElementMeta for SingleRow {
    fn label() -> &'static str { "Single Column Row" }
    fn editor_default() -> Self {
        Self { field: FieldSlot::new("Field Name"), custom_height: None }
    }
}

/// Two fields side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub left: FieldSlot,
    pub right: FieldSlot,
    pub custom_height: Option<u32>,
}

impl ElementMeta for Row {
    fn label() -> &'static str { "Two Column Row" }
    fn editor_default() -> Self {
        Self {
            left: FieldSlot::new("Field 1"),
            right: FieldSlot::new("Field 2"),
            custom_height: None,
        }
    }
}

/// Four fields laid out as two stacked two-field rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourFieldGrid {
    pub f1: FieldSlot,
    pub f2: FieldSlot,
    pub f3: FieldSlot,
    pub f4: FieldSlot,
    pub custom_height: Option<u32>,
}

impl ElementMeta for FourFieldGrid {
    fn label() -> &'static str { "Four Column Grid" }
    fn editor_default() -> Self {
        Self {
            f1: FieldSlot::new("Field 1"),
            f2: FieldSlot::new("Field 2"),
            f3: FieldSlot::new("Field 3"),
            f4: FieldSlot::new("Field 4"),
            custom_height: None,
        }
    }
}

/// Labeled signature line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub field: FieldSlot,
    pub custom_height: Option<u32>,
}

impl ElementMeta for Signature {
    fn label() -> &'static str { "Signature" }
    fn editor_default() -> Self {
        Self { field: FieldSlot::new("Signature"), custom_height: None }
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// One table column: header text and the source-row key it reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub label: String,
    pub source_field: String,
}

impl TableColumn {
    pub fn new(label: impl Into<String>, source_field: impl Into<String>) -> Self {
        Self { label: label.into(), source_field: source_field.into() }
    }
}

/// Data table bound to a table-kind field.
///
/// Without a resolved source (or while editing) it renders
/// `static_row_count` empty rows so the shape is visible before data exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub table_mapping: String,
    pub columns: Vec<TableColumn>,
    #[serde(deserialize_with = "bounded_row_count")]
    pub static_row_count: usize,
    pub hide_header: bool,
}

/// Upper bound on placeholder rows a table renders while unbound.
pub const MAX_STATIC_ROWS: usize = 100;

fn bounded_row_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let count = usize::deserialize(deserializer)?;
    if count > MAX_STATIC_ROWS {
        return Err(serde::de::Error::custom(format!(
            "static_row_count {} exceeds the maximum of {}",
            count, MAX_STATIC_ROWS
        )));
    }
    Ok(count)
}

impl ElementMeta for Table {
    fn label() -> &'static str { "Table" }
    fn editor_default() -> Self {
        Self {
            table_mapping: no_binding(),
            columns: vec![
                TableColumn::new("Column 1", NO_BINDING),
                TableColumn::new("Column 2", NO_BINDING),
            ],
            static_row_count: 3,
            hide_header: false,
        }
    }
}

// ============================================================================
// CHOICE GROUP
// ============================================================================

/// Native widget of a choice group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceInput {
    #[default]
    Checkbox,
    /// Exclusive selection.
    Radio,
}

/// Grid of checkbox or radio options bound to a list field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceGroup {
    pub title: String,
    pub input_type: ChoiceInput,
    pub options: Vec<String>,
    /// Grid column count.
    pub columns: u32,
    pub mapping: String,
    pub hide_label: bool,
    pub label_as_header: bool,
    pub custom_height: Option<u32>,
}

impl ElementMeta for ChoiceGroup {
    fn label() -> &'static str { "Checkbox Group" }
    fn editor_default() -> Self {
        Self {
            title: "Classification".into(),
            input_type: ChoiceInput::Checkbox,
            options: vec!["Option 1".into(), "Option 2".into()],
            columns: 2,
            mapping: no_binding(),
            hide_label: false,
            label_as_header: false,
            custom_height: None,
        }
    }
}

// ============================================================================
// CONTENT KINDS
// ============================================================================

/// Large free-text box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextArea {
    pub label: String,
    /// Hint shown in the empty box while editing.
    pub placeholder: String,
    pub mapping: String,
    pub custom_height: Option<u32>,
}

impl ElementMeta for TextArea {
    fn label() -> &'static str { "Large Text Box" }
    fn editor_default() -> Self {
        Self {
            label: "Description".into(),
            placeholder: "Enter details...".into(),
            mapping: no_binding(),
            custom_height: None,
        }
    }
}

/// Image attachment bound to an image field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub label: String,
    pub mapping: String,
    pub use_custom_size: bool,
    pub custom_width: u32,
    pub custom_height: u32,
}

impl ElementMeta for Attachment {
    fn label() -> &'static str { "Attachment" }
    fn editor_default() -> Self {
        Self {
            label: "Attachment".into(),
            mapping: no_binding(),
            use_custom_size: false,
            custom_width: 200,
            custom_height: 200,
        }
    }
}
