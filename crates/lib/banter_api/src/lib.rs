//! # banter_api
//!
//! HTTP surface for the Banter chat relay.

pub mod handlers;
pub mod response;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use banter_core::relay::ChatRelay;

use crate::handlers::{chat, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The request translator. Stateless across invocations; the hosting
    /// runtime may drive it concurrently for independent events.
    pub relay: Arc<ChatRelay>,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/chat",
            post(chat::chat_handler).options(chat::preflight_handler),
        )
        .route("/health", get(health::health_handler))
        .with_state(state)
}
