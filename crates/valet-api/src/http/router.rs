//! Axum router configuration with middleware.
//!
//! API routes are under `/api/`. Middleware: CORS, request tracing.
//!
//! The front-end asset bundle is served from disk when the configured
//! directory exists; API routes take priority and unknown paths fall
//! through to the bundle's `index.html`. If the directory does not exist,
//! only the API is served.

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, web_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/history", get(handlers::chat::history))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if web_dir.exists() {
        let index_path = web_dir.join("index.html");
        let serve_dir = ServeDir::new(web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir.display(), "static file serving enabled");
    }

    router
}

/// GET /health - simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
