//! # Template Document Model
//!
//! The closed set of element kinds, their typed property records, the
//! ordered [`Template`] that owns placed elements, and the per-kind
//! rendering strategies.
//!
//! ```
//! use stencil::document::{ElementKind, Template};
//! use stencil::fields::FieldCatalog;
//! use stencil::render::ViewMode;
//!
//! let mut template = Template::new();
//! let id = template.add(ElementKind::Row);
//!
//! let patch = serde_json::json!({"left": {
//!     "label": "Inspector", "mapping": "supervisor_name",
//!     "hide_label": false, "label_as_header": false, "stacked": false
//! }});
//! template.update_props(&id, patch.as_object().unwrap()).unwrap();
//!
//! let catalog = FieldCatalog::sample();
//! let node = template.get(&id).unwrap().render(ViewMode::Previewing, false, &catalog);
//! assert!(node.text_content().contains("Jane Smith"));
//! ```

pub mod types;

mod choice;
mod content;
mod headers;
pub mod resolve;
mod rows;
mod table;
mod template;

pub use resolve::Resolver;
pub use template::{Direction, ElementId, Template, TemplateElement, TemplateError};
pub use types::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{Node, ViewMode};

// ============================================================================
// RENDER CONTEXT
// ============================================================================

/// Context passed to each kind's `render()`: the view mode, the adjacency
/// flag computed by the page pass, and the binding resolver.
pub struct RenderContext<'a> {
    pub mode: ViewMode,
    /// Element directly follows a section header; suppress top border.
    pub flush: bool,
    pub resolver: Resolver<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn is_preview(&self) -> bool {
        self.mode == ViewMode::Previewing
    }

    /// Resolved text for a binding, or `None` while editing.
    ///
    /// Resolution only happens in preview; editing shows badges instead.
    pub fn scalar(&self, mapping: &str) -> Option<String> {
        self.is_preview().then(|| self.resolver.resolve_scalar(mapping))
    }

    /// Fixed height override as an inline style value.
    pub fn height_px(custom_height: Option<u32>) -> Option<String> {
        custom_height.map(|h| format!("{}px", h))
    }
}

// ============================================================================
// PROPERTY MERGE
// ============================================================================

/// A property patch that does not fit the target kind's schema.
#[derive(Debug, Error)]
pub enum PropsError {
    #[error("{kind:?} has no property '{key}'")]
    UnknownKey { kind: ElementKind, key: String },

    #[error("{kind:?}: invalid property value: {message}")]
    InvalidValue { kind: ElementKind, message: String },

    #[error("{kind:?}: properties must be an object")]
    NotAnObject { kind: ElementKind },
}

/// Shallow-merge `partial` into `target`.
///
/// Every key must already exist in the record's serialized form. The
/// merged bag is re-validated as a whole; on any error `target` is left
/// untouched.
fn merge_record<T>(
    target: &mut T,
    kind: ElementKind,
    partial: &serde_json::Map<String, serde_json::Value>,
) -> Result<(), PropsError>
where
    T: Serialize + DeserializeOwned,
{
    let invalid = |e: serde_json::Error| PropsError::InvalidValue {
        kind,
        message: e.to_string(),
    };

    let serde_json::Value::Object(mut bag) = serde_json::to_value(&*target).map_err(invalid)? else {
        return Err(PropsError::NotAnObject { kind });
    };

    for (key, value) in partial {
        if !bag.contains_key(key) {
            return Err(PropsError::UnknownKey {
                kind,
                key: key.clone(),
            });
        }
        bag.insert(key.clone(), value.clone());
    }

    *target = serde_json::from_value(serde_json::Value::Object(bag)).map_err(invalid)?;
    Ok(())
}

/// Deserialize a complete property bag, rejecting keys outside the schema.
fn record_from_value<T>(kind: ElementKind, value: serde_json::Value) -> Result<T, PropsError>
where
    T: Serialize + DeserializeOwned + ElementMeta,
{
    let serde_json::Value::Object(map) = value else {
        return Err(PropsError::NotAnObject { kind });
    };
    // Start from the default so the key check has a schema to compare with.
    let mut record = T::editor_default();
    merge_record(&mut record, kind, &map)?;
    // Every schema key must have been supplied.
    let serde_json::Value::Object(schema) = serde_json::to_value(&record).map_err(|e| {
        PropsError::InvalidValue {
            kind,
            message: e.to_string(),
        }
    })?
    else {
        return Err(PropsError::NotAnObject { kind });
    };
    if let Some(missing) = schema.keys().find(|k| !map.contains_key(*k)) {
        return Err(PropsError::InvalidValue {
            kind,
            message: format!("missing property '{}'", missing),
        });
    }
    Ok(record)
}

// ============================================================================
// KIND REGISTRY
// ============================================================================

/// Define `ElementKind`, `ElementProps` and all dispatch methods from a
/// single list.
///
/// Adding a new kind: add one line here, then define the record in
/// `types.rs` with `impl ElementMeta` and give it a `render()` method.
macro_rules! define_elements {
    ($($variant:ident($inner:ty) => $tag:literal),+ $(,)?) => {
        /// The closed set of element kinds.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ElementKind {
            $(#[serde(rename = $tag)] $variant,)+
        }

        impl ElementKind {
            /// Every kind, in palette order.
            pub const ALL: &'static [ElementKind] = &[$(ElementKind::$variant,)+];

            /// Wire tag (e.g. `"choice_group"`).
            pub fn tag(self) -> &'static str {
                match self { $(ElementKind::$variant => $tag,)+ }
            }

            /// Human-readable display label (from [`ElementMeta::label`]).
            pub fn label(self) -> &'static str {
                match self { $(ElementKind::$variant => <$inner>::label(),)+ }
            }

            /// Fresh copy of this kind's default property set.
            pub fn default_props(self) -> ElementProps {
                match self { $(ElementKind::$variant => ElementProps::$variant(<$inner>::editor_default()),)+ }
            }

            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag { $($tag => Some(ElementKind::$variant),)+ _ => None }
            }
        }

        /// The typed property bag of one element, one variant per kind.
        #[derive(Debug, Clone, PartialEq)]
        pub enum ElementProps {
            $($variant($inner),)+
        }

        impl ElementProps {
            pub fn kind(&self) -> ElementKind {
                match self { $(ElementProps::$variant(_) => ElementKind::$variant,)+ }
            }

            /// Build the visual tree for this element.
            pub fn render(&self, ctx: &RenderContext) -> Node {
                match self { $(ElementProps::$variant(p) => p.render(ctx),)+ }
            }

            /// Shallow-merge a partial property bag; see [`PropsError`].
            pub fn merge(
                &mut self,
                partial: &serde_json::Map<String, serde_json::Value>,
            ) -> Result<(), PropsError> {
                let kind = self.kind();
                match self { $(ElementProps::$variant(p) => merge_record(p, kind, partial),)+ }
            }

            /// The property bag as a JSON object.
            pub fn to_value(&self) -> serde_json::Value {
                let result = match self { $(ElementProps::$variant(p) => serde_json::to_value(p),)+ };
                result.unwrap_or(serde_json::Value::Null)
            }

            /// Parse a complete property bag for `kind`.
            pub fn from_value(kind: ElementKind, value: serde_json::Value) -> Result<Self, PropsError> {
                match kind { $(ElementKind::$variant => Ok(ElementProps::$variant(record_from_value(kind, value)?)),)+ }
            }
        }
    };
}

define_elements! {
    MainHeader(MainHeader) => "main_header",
    Title(Title) => "title",
    SectionHeader(SectionHeader) => "section_header",
    SingleRow(SingleRow) => "single_row",
    Row(Row) => "row",
    FourFieldGrid(FourFieldGrid) => "four_field_grid",
    Signature(Signature) => "signature",
    Table(Table) => "table",
    ChoiceGroup(ChoiceGroup) => "choice_group",
    TextArea(TextArea) => "text_area",
    Attachment(Attachment) => "attachment",
}

impl ElementProps {
    /// Property key an uploaded image is merged into, if the kind has one.
    pub fn image_slot(&self) -> Option<&'static str> {
        match self {
            ElementProps::MainHeader(_) => Some("logo_url"),
            _ => None,
        }
    }
}

/// Element kind metadata for the frontend palette.
#[derive(Debug, Clone, Serialize)]
pub struct ElementKindMeta {
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub label: &'static str,
    pub default_props: serde_json::Value,
}

/// Metadata for every kind, derived from the registry.
pub fn element_kinds() -> Vec<ElementKindMeta> {
    ElementKind::ALL
        .iter()
        .map(|kind| ElementKindMeta {
            type_name: kind.tag(),
            label: kind.label(),
            default_props: kind.default_props().to_value(),
        })
        .collect()
}
