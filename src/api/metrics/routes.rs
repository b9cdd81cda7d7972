// Metrics route definitions

use axum::{routing::post, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router for the metrics ingestion endpoint
pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        // Bodies above MAX_REQUEST_BODY_SIZE are rejected with 413
        .route("/api/metrics", post(handler::metrics_handler))
}
