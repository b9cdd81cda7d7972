// Games list endpoint

use axum::Json;
use serde::Serialize;
use tracing::{info, instrument};

pub const GAMES_TODO_MESSAGE: &str = "TODO: implement /api/games endpoint";

#[derive(Debug, Serialize)]
pub struct GamesPlaceholder {
    pub message: &'static str,
}

/// Placeholder: always answers with the TODO message, whatever the request
#[instrument]
pub async fn games_handler() -> Json<GamesPlaceholder> {
    info!("Games endpoint called");

    Json(GamesPlaceholder {
        message: GAMES_TODO_MESSAGE,
    })
}
