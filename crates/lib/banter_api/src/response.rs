// @zen-component: PLAN-003-ResponseEnvelope
//
//! Response envelope construction.
//!
//! Every envelope response — success, failure, preflight — carries the same
//! fixed header set so browser clients behind the gateway can call the relay
//! cross-origin without per-route CORS negotiation.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use banter_core::error::RelayError;
use banter_core::relay::ChatReply;

pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";

/// Success body: the generated reply plus the extended history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSuccess {
    pub success: bool,
    pub response: String,
    pub conversation_history: Vec<Value>,
}

/// Failure body: human-readable error plus a stable machine-readable kind.
#[derive(Debug, Serialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
    pub kind: &'static str,
}

/// HTTP 200 with the success envelope.
pub fn success(reply: ChatReply) -> Response {
    with_cors(
        (
            StatusCode::OK,
            Json(ChatSuccess {
                success: true,
                response: reply.response,
                conversation_history: reply.conversation_history,
            }),
        )
            .into_response(),
    )
}

/// HTTP 500 with the failure envelope. Every relay error lands here; the
/// caller always receives a well-formed body, never a bare fault.
pub fn failure(err: &RelayError) -> Response {
    with_cors(
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatFailure {
                success: false,
                error: err.to_string(),
                kind: err.kind(),
            }),
        )
            .into_response(),
    )
}

/// HTTP 200 for CORS preflight.
pub fn preflight() -> Response {
    with_cors((StatusCode::OK, Json(serde_json::json!({}))).into_response())
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    response
}
