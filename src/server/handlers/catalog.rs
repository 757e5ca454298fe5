//! Read-only catalog endpoints: bindable fields and element kinds.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::document;

use super::super::state::AppState;

/// GET /api/fields - the field catalog, sentinel first.
pub async fn fields(State(state): State<Arc<AppState>>) -> Response {
    Json(state.catalog.as_ref()).into_response()
}

/// GET /api/kinds - element kinds with labels and default properties.
pub async fn kinds() -> Json<Vec<document::ElementKindMeta>> {
    Json(document::element_kinds())
}
