// Global error handling for HTTP middleware layers

use axum::{http::StatusCode, http::Uri, BoxError};
use http_body_util::LengthLimitError;
use serde_json::json;
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

use crate::utils::response_handler::HandlerResponse;

/// Maps errors raised by tower layers to enveloped HTTP responses
pub async fn handle_global_error(err: BoxError) -> HandlerResponse {
    // 413 if the body was too large
    if let Some(e) = find_cause::<LengthLimitError>(&*err) {
        return HandlerResponse::new(StatusCode::PAYLOAD_TOO_LARGE)
            .message(format!("Request body too large: {}", e));
    }

    // 408 if the request took too long
    if let Some(e) = err.downcast_ref::<Elapsed>() {
        return HandlerResponse::new(StatusCode::REQUEST_TIMEOUT)
            .message(format!("Request timeout: {}", e));
    }

    warn!("Unhandled layer error: {}", err);

    HandlerResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
        .message(format!("Unhandled internal error: {}", err))
}

/// 404 for every path no route matched
pub async fn fallback_handler(uri: Uri) -> HandlerResponse {
    HandlerResponse::new(StatusCode::NOT_FOUND)
        .data(json!({ "path": uri.path() }))
        .message("The requested route does not exist")
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
