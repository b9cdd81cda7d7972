// Metrics ingestion endpoint

use axum::{body::Bytes, Json};
use serde::Serialize;
use std::backtrace::Backtrace;
use tracing::{debug, instrument};

pub const METRICS_TODO_MESSAGE: &str = "TODO: implement /api/metrics";

#[derive(Debug, Serialize)]
pub struct MetricsAck {
    pub ok: bool,
    pub message: &'static str,
}

/// Placeholder: acknowledges every POST and discards the payload
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(body))]
pub async fn metrics_handler(
    body: Bytes, // Forces body reading and triggers size limits
) -> Json<MetricsAck> {
    debug!("Discarding metrics payload of {} bytes", body.len());

    Json(MetricsAck {
        ok: true,
        message: METRICS_TODO_MESSAGE,
    })
}
