//! # Stencil - Document Template Designer
//!
//! Stencil assembles printable documents from typed layout blocks. A
//! designer places elements (headers, labeled rows, tables, choice groups,
//! signatures, text areas, image attachments) on a page, binds their slots
//! to named data fields, and switches to a preview where bindings resolve
//! against sample data. It provides:
//!
//! - **Field catalog**: read-only typed data fields to bind against
//! - **Template model**: ordered elements with strongly-typed properties
//! - **Renderer**: one strategy per element kind, screen and print media
//! - **Session**: selection, drag, view mode, delayed printing
//! - **Server**: a browser designer over HTTP
//!
//! ## Quick Start
//!
//! ```
//! use stencil::{
//!     document::ElementKind,
//!     fields::FieldCatalog,
//!     render::{Medium, ViewMode},
//!     session::Session,
//! };
//!
//! let catalog = FieldCatalog::sample();
//! let mut session = Session::new();
//!
//! let id = session.add_element(ElementKind::SingleRow);
//! let patch = serde_json::json!({"field": {
//!     "label": "Employee", "mapping": "employee_name",
//!     "hide_label": false, "label_as_header": false, "stacked": false
//! }});
//! session.update_props(&id, patch.as_object().unwrap())?;
//!
//! session.set_view(ViewMode::Previewing);
//! let html = session.render(&catalog, Medium::Print);
//! assert!(html.contains("John Doe"));
//! # Ok::<(), stencil::error::StencilError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`fields`] | Field catalog and sample data |
//! | [`document`] | Element kinds, property records, template, resolution |
//! | [`render`] | Visual tree, page assembly, HTML codegen |
//! | [`session`] | Interaction controller, printing, image ingestion |
//! | [`server`] | HTTP server and JSON API |
//! | [`error`] | Error types |

pub mod document;
pub mod error;
pub mod fields;
pub mod render;
pub mod server;
pub mod session;

// Re-exports for convenience
pub use document::{ElementKind, Template};
pub use error::StencilError;
pub use fields::FieldCatalog;
pub use session::Session;
