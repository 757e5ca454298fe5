//! Print trigger.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use super::super::state::AppState;

/// POST /api/print - enter preview and schedule a delayed print.
pub async fn print(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ticket = state.session.write().await.request_print();
    info!(?ticket, delay_ms = state.printer.delay().as_millis() as u64, "print scheduled");
    state
        .printer
        .schedule(state.session.clone(), state.catalog.clone(), ticket);

    Json(json!({
        "success": true,
        "delay_ms": state.printer.delay().as_millis() as u64,
    }))
}
