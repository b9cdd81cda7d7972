// Games route definitions

use axum::{routing::any, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router for the games endpoint
pub fn games_routes() -> Router<AppState> {
    Router::new()
        // Method, query and body are ignored
        .route("/api/games", any(handler::games_handler))
}
