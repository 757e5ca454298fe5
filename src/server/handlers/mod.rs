//! HTTP request handlers.

pub mod catalog;
pub mod print;
pub mod session;
pub mod upload;

use axum::http::StatusCode;

use crate::error::StencilError;

/// Map a library error to a status code and message.
pub(crate) fn error_response(e: StencilError) -> (StatusCode, String) {
    let status = match &e {
        StencilError::Props(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StencilError::Image(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}
