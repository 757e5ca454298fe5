//! The ordered template and its structural operations.
//!
//! Sequence order is visual top-to-bottom order is print order. All
//! mutation goes through the methods here; operations aimed at a missing id
//! or an out-of-range index are no-ops rather than errors, since editing
//! gestures can race with removals (e.g. a late image load).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::{ElementKind, ElementProps, PropsError, RenderContext, Resolver};
use crate::fields::FieldCatalog;
use crate::render::{Node, ViewMode};

/// Stable identity of a placed element. Generated once, never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Fresh random id (UUID v4, simple form).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Reorder direction for [`Template::swap_by_offset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// A placed element: identity plus typed properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ElementRecord", into = "ElementRecord")]
pub struct TemplateElement {
    id: ElementId,
    props: ElementProps,
}

impl TemplateElement {
    /// Instantiate `kind` with a fresh id and an independent copy of its defaults.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId::generate(),
            props: kind.default_props(),
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.props.kind()
    }

    pub fn props(&self) -> &ElementProps {
        &self.props
    }

    /// Render this element on its own, outside of page assembly.
    pub fn render(&self, mode: ViewMode, flush: bool, catalog: &FieldCatalog) -> Node {
        let ctx = RenderContext {
            mode,
            flush,
            resolver: Resolver::new(catalog),
        };
        self.props.render(&ctx)
    }
}

/// Wire shape of an element: `{id, kind, props}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ElementRecord {
    id: ElementId,
    kind: ElementKind,
    props: serde_json::Value,
}

impl TryFrom<ElementRecord> for TemplateElement {
    type Error = PropsError;

    fn try_from(record: ElementRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            props: ElementProps::from_value(record.kind, record.props)?,
        })
    }
}

impl From<TemplateElement> for ElementRecord {
    fn from(element: TemplateElement) -> Self {
        ElementRecord {
            id: element.id,
            kind: element.props.kind(),
            props: element.props.to_value(),
        }
    }
}

/// Errors from loading a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("duplicate element id: {0}")]
    DuplicateId(ElementId),
}

/// The ordered sequence of placed elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TemplateElement>", into = "Vec<TemplateElement>")]
pub struct Template {
    elements: Vec<TemplateElement>,
}

impl TryFrom<Vec<TemplateElement>> for Template {
    type Error = TemplateError;

    fn try_from(elements: Vec<TemplateElement>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for el in &elements {
            if !seen.insert(el.id()) {
                return Err(TemplateError::DuplicateId(el.id().clone()));
            }
        }
        Ok(Self { elements })
    }
}

impl From<Template> for Vec<TemplateElement> {
    fn from(template: Template) -> Self {
        template.elements
    }
}

impl Template {
    /// Create an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new element of `kind` and return its id.
    pub fn add(&mut self, kind: ElementKind) -> ElementId {
        let element = TemplateElement::new(kind);
        let id = element.id.clone();
        self.elements.push(element);
        id
    }

    /// Shallow-merge `partial` into the element's properties.
    ///
    /// Returns `Ok(false)` when no element has `id` (silently ignored).
    pub fn update_props(
        &mut self,
        id: &ElementId,
        partial: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<bool, PropsError> {
        match self.elements.iter_mut().find(|el| &el.id == id) {
            Some(el) => {
                el.props.merge(partial)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the element with `id`, returning it if it existed.
    pub fn remove(&mut self, id: &ElementId) -> Option<TemplateElement> {
        let index = self.position(id)?;
        Some(self.elements.remove(index))
    }

    /// Exchange the element at `index` with its neighbour in `direction`.
    ///
    /// No-op (returns false) if either position is out of bounds.
    pub fn swap_by_offset(&mut self, index: usize, direction: Direction) -> bool {
        let Some(target) = index.checked_add_signed(direction.offset()) else {
            return false;
        };
        if index >= self.elements.len() || target >= self.elements.len() {
            return false;
        }
        self.elements.swap(index, target);
        true
    }

    /// Remove the element at `from` and reinsert it at `to` in the shortened
    /// sequence. Elements in between shift by one.
    ///
    /// No-op (returns false) if `from == to` or either index is out of range.
    pub fn relocate(&mut self, from: usize, to: usize) -> bool {
        let len = self.elements.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let element = self.elements.remove(from);
        self.elements.insert(to, element);
        true
    }

    pub fn get(&self, id: &ElementId) -> Option<&TemplateElement> {
        self.elements.iter().find(|el| &el.id == id)
    }

    pub fn position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|el| &el.id == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.position(id).is_some()
    }

    pub fn elements(&self) -> &[TemplateElement] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ids in sequence order.
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|el| el.id.clone()).collect()
    }
}
