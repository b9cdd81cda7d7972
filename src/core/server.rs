// Application server configuration and setup

use std::time::Duration;
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::get,
    Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tokio::{net::TcpListener, signal};
use listenfd::ListenFd;
use anyhow::Result;

use crate::api::{games::routes::games_routes, metrics::routes::metrics_routes};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::pages::home::home_handler;
use crate::utils::{
    error_handler::{fallback_handler, handle_global_error},
    response_handler::response_wrapper,
};

/// Creates the application router with every route and middleware layer
pub fn create_app(state: AppState) -> Router {
    let router: Router<AppState> = Router::new()
        .route("/", get(home_handler))
        .merge(games_routes())
        .merge(metrics_routes())
        .fallback(fallback_handler);

    with_middleware(router, &state.environment).with_state(state)
}

/// Applies the global layers: error envelope, error mapping, timeout and body limit
pub fn with_middleware(router: Router<AppState>, env: &EnvironmentVariables) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(response_wrapper))
            .layer(HandleErrorLayer::new(handle_global_error))
            .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
            .layer(DefaultBodyLimit::max(env.max_request_body_size)),
    )
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => TcpListener::bind(env.address()).await?,
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
