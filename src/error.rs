//! # Error Types
//!
//! This module defines error types used throughout the stencil library.
//!
//! Most editing failures never reach here: a gesture aimed at an element
//! that no longer exists is absorbed as a no-op. What remains are malformed
//! inputs from outside the session (catalog files, property patches, uploads)
//! and I/O at the print boundary.

use thiserror::Error;

use crate::document::PropsError;
use crate::fields::CatalogError;

/// Main error type for stencil operations
#[derive(Debug, Error)]
pub enum StencilError {
    /// Field catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Property patch does not fit the element's schema
    #[error("Invalid properties: {0}")]
    Props(#[from] PropsError),

    /// Uploaded bytes are not a usable image
    #[error("Image error: {0}")]
    Image(String),

    /// Print facility failed
    #[error("Print error: {0}")]
    Print(String),

    /// Server failed to bind or run
    #[error("Server error: {0}")]
    Server(String),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
