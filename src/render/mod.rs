//! # Rendering
//!
//! Turns a template into a visual tree and serializes it.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────┐
//! │ Template │ ──► │ page assembly│ ──► │  Node tree   │ ──► │ Codegen  │
//! │(elements)│     │ (wrappers,   │     │ (inspectable)│     │  (HTML)  │
//! └──────────┘     │  adjacency)  │     └──────────────┘     └──────────┘
//!                  └──────────────┘
//! ```
//!
//! Per-kind rendering strategies live next to the property records in
//! [`crate::document`]; this module owns the tree, the page-level pass
//! (flush detection, selection and drag affordances) and the codegen.

mod html;
mod node;
mod page;

pub use html::escape;
pub use node::{Element, Node};
pub use page::{PageState, render_page};

use serde::{Deserialize, Serialize};

/// Global view mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Designer view: binding badges, selection, drag handles.
    #[default]
    Editing,
    /// Bindings resolved against the field catalog; what gets printed.
    Previewing,
}

/// Output medium for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Medium {
    /// Interactive surface: everything rendered.
    #[default]
    Screen,
    /// Fixed medium: non-printable affordances dropped.
    Print,
}
