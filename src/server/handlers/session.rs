//! Session endpoints: state snapshot, gestures, rendered page.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::document::ElementId;
use crate::render::Medium;
use crate::session::{Gesture, Outcome, Snapshot};

use super::super::state::AppState;
use super::error_response;

/// Body of a gesture response.
#[derive(Debug, Serialize)]
struct GestureResponse<'a> {
    changed: bool,
    /// Id of the element created by an `add` gesture.
    added: Option<ElementId>,
    /// Whether a delayed print was scheduled.
    printing: bool,
    session: Snapshot<'a>,
}

/// Query parameters for the render endpoint.
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub medium: Medium,
}

/// GET /api/session - template, selection, drag state and view mode.
pub async fn snapshot(State(state): State<Arc<AppState>>) -> Response {
    let session = state.session.read().await;
    Json(session.snapshot()).into_response()
}

/// POST /api/gesture - apply one editing gesture.
pub async fn gesture(
    State(state): State<Arc<AppState>>,
    Json(gesture): Json<Gesture>,
) -> Result<Response, (StatusCode, String)> {
    debug!(?gesture, "gesture received");

    let (outcome, response) = {
        let mut session = state.session.write().await;
        let outcome = session
            .apply(gesture)
            .map_err(|e| error_response(e.into()))?;
        let body = GestureResponse {
            changed: outcome.is_change(),
            added: match &outcome {
                Outcome::Added(id) => Some(id.clone()),
                _ => None,
            },
            printing: matches!(outcome, Outcome::PrintRequested(_)),
            session: session.snapshot(),
        };
        (outcome, Json(body).into_response())
    };

    if let Outcome::PrintRequested(ticket) = outcome {
        state
            .printer
            .schedule(state.session.clone(), state.catalog.clone(), ticket);
    }

    Ok(response)
}

/// GET /api/render?medium=screen|print - the current page as HTML.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RenderQuery>,
) -> Html<String> {
    let session = state.session.read().await;
    Html(session.render(&state.catalog, query.medium))
}
