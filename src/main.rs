// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use content_site::config::state::AppState;
use content_site::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;

    let app: Router = server::create_app(state.clone());
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    info!(
        "Server listening on: {}://{}",
        state.environment.protocol,
        listener.local_addr()?
    );

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
