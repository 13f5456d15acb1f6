//! Health endpoint — bootstrap check.

use axum::Json;
use axum::extract::State;

use crate::AppState;

/// `GET /health` — reports the crate version and whether a usable
/// generation endpoint is configured. Does not call the endpoint.
pub async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let endpoint_configured = state.relay.config().validate().is_ok();

    Json(serde_json::json!({
        "status": "ok",
        "version": banter_core::version(),
        "endpointConfigured": endpoint_configured,
    }))
}
