//! Image upload into an element's image slot.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::document::ElementId;
use crate::session::load_image;

use super::super::state::AppState;
use super::error_response;

/// POST /api/elements/:id/image - attach an uploaded image.
///
/// A request without an `image` part (or with an empty one) is a no-op.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Response, (StatusCode, String)> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read image: {}", e)))?;
            image_data = Some(bytes.to_vec());
            break;
        }
    }

    let Some(bytes) = image_data.filter(|b| !b.is_empty()) else {
        debug!(id = %id, "upload without image; ignored");
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let attached = load_image(state.session.clone(), ElementId::from(id), bytes)
        .await
        .map_err(error_response)?;

    Ok(Json(json!({ "attached": attached })).into_response())
}
