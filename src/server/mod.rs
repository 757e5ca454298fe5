//! # HTTP Server for the Template Designer
//!
//! Serves the designer frontend and a JSON API over one shared session.
//!
//! ## Usage
//!
//! ```bash
//! stencil serve --listen 0.0.0.0:8080 --spool ./spool
//! ```
//!
//! Then open http://localhost:8080 in a browser to edit the template.
//!
//! ## Routes
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /api/fields` | Field catalog |
//! | `GET /api/kinds` | Element kinds and default properties |
//! | `GET /api/session` | Template, selection, drag state, view |
//! | `GET /api/render?medium=` | Rendered page HTML |
//! | `POST /api/gesture` | Apply one [`Gesture`](crate::session::Gesture) |
//! | `POST /api/elements/:id/image` | Attach an image (multipart `image`) |
//! | `POST /api/print` | Enter preview and schedule a print |

mod handlers;
mod state;
mod static_files;

pub use state::{AppState, ServerConfig};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::StencilError;

/// Build the router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Frontend
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        // Catalog
        .route("/api/fields", get(handlers::catalog::fields))
        .route("/api/kinds", get(handlers::catalog::kinds))
        // Session
        .route("/api/session", get(handlers::session::snapshot))
        .route("/api/render", get(handlers::session::render))
        .route("/api/gesture", post(handlers::session::gesture))
        .route("/api/print", post(handlers::print::print))
        // Uploads (10MB limit)
        .route(
            "/api/elements/:id/image",
            post(handlers::upload::upload).layer(DefaultBodyLimit::max(10 * 1024 * 1024)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use stencil::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), stencil::error::StencilError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..ServerConfig::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), StencilError> {
    let app_state = Arc::new(AppState::new(config.clone())?);
    info!(
        fields = app_state.catalog.len(),
        spool = %config.spool_dir.display(),
        delay_ms = config.print_delay.as_millis() as u64,
        "stencil server starting"
    );

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            StencilError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;
    info!("listening on http://{}/", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| StencilError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
