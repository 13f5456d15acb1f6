// @zen-component: PLAN-003-ChatHandler
//
//! Chat handler — hosts the relay contract on `POST /chat`.

use axum::extract::State;
use axum::response::Response;
use tracing::{info, warn};
use uuid::Uuid;

use banter_core::error::RelayError;
use banter_core::event::ChatEvent;

use crate::AppState;
use crate::response;

/// `POST /chat` — translate one chat event.
///
/// Takes the raw body rather than a typed extractor: every input, valid or
/// not, must yield the JSON envelope, and `Json<ChatEvent>` would reject a
/// malformed event before this handler ran.
pub async fn chat_handler(State(state): State<AppState>, raw: String) -> Response {
    let request_id = Uuid::new_v4();

    let event = match serde_json::from_str::<ChatEvent>(&raw) {
        Ok(event) => event,
        Err(e) => {
            let err = RelayError::MalformedRequest(format!("event is not valid JSON: {e}"));
            warn!(%request_id, kind = err.kind(), error = %err, "chat relay failed");
            return response::failure(&err);
        }
    };

    match state.relay.handle(&event).await {
        Ok(reply) => {
            info!(
                %request_id,
                history_turns = reply.conversation_history.len(),
                "chat relayed"
            );
            response::success(reply)
        }
        Err(err) => {
            warn!(%request_id, kind = err.kind(), error = %err, "chat relay failed");
            response::failure(&err)
        }
    }
}

/// `OPTIONS /chat` — CORS preflight.
pub async fn preflight_handler() -> Response {
    response::preflight()
}
