// Error envelope for API responses
// Successful responses are passed through untouched; everything with a 4xx/5xx
// status is rewritten into ResponseFormat.

use axum::{
    body::{Body, Bytes},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        response::Parts,
        HeaderValue, Request, Response, StatusCode,
    },
    middleware::Next,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::convert::Infallible;
use tracing::{debug, error};

use crate::utils::utils::to_two_space_indented_json;

/// JSON format of every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "NOT_FOUND")
    pub code: u16,               // HTTP status code
    pub data: serde_json::Value, // Extra error details
    pub messages: Vec<String>,   // Human readable messages
    pub date: String,            // ISO timestamp
}

/// Convenience struct for building envelope responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: serde_json::Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: serde_json::Value::Null,
            messages: Vec::new(),
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(json!({
            "data": self.data,
            "messages": self.messages
        }))
        .into_response();

        *response.status_mut() = self.status_code;

        // Store HandlerResponse in extensions for middleware processing
        response.extensions_mut().insert(self);
        response
    }
}

/// "Not Found" -> "NOT_FOUND"
fn format_status(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Plain-text bodies produced by axum rejections become the envelope message
fn body_as_message(bytes: &Bytes) -> Option<String> {
    let text: &str = std::str::from_utf8(bytes).ok()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Logs the formatted response with proper JSON indentation
fn log_formatted_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => debug!("\nError response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Builds the final response with JSON content type
fn build_final_response(mut parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(wrapped).unwrap_or_else(|_| b"{}".to_vec());

    parts.headers.remove(CONTENT_LENGTH);
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Response::from_parts(parts, Body::from(json_body))
}

/// Wraps an error response into ResponseFormat
pub async fn wrap_error_response(response: Response<Body>) -> Response<Body> {
    let handler_response: Option<HandlerResponse> =
        response.extensions().get::<HandlerResponse>().cloned();
    let (parts, body) = response.into_parts();

    let (data, messages) = match handler_response {
        Some(r) => (r.data, r.messages),
        None => {
            let messages: Vec<String> = match body.collect().await {
                Ok(collected) => body_as_message(&collected.to_bytes()).into_iter().collect(),
                Err(err) => {
                    error!("Failed to read error body: {:?}", err);
                    Vec::new()
                }
            };
            (Value::Null, messages)
        }
    };

    let wrapped: ResponseFormat = ResponseFormat {
        status: format_status(parts.status),
        code: parts.status.as_u16(),
        data,
        messages,
        date: Utc::now().to_rfc3339(),
    };

    log_formatted_response(&wrapped);

    build_final_response(parts, &wrapped)
}

/// Middleware that puts every 4xx/5xx response into the standard envelope
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let response: Response<Body> = next.run(req).await;

    if response.status().is_client_error() || response.status().is_server_error() {
        return Ok(wrap_error_response(response).await);
    }

    Ok(response)
}
