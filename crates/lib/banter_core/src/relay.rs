// @zen-component: RELAY-ChatRelay
//
//! The request translator.
//!
//! One invocation per inbound event: check configuration, note the caller,
//! parse the body, call the generation endpoint, extend the caller-supplied
//! history with the new exchange. Every failure surfaces as a [`RelayError`]
//! for the HTTP layer to fold into the failure envelope — nothing here
//! panics or escapes the handler boundary.

use serde_json::Value;
use tracing::{debug, info};

use crate::chat::ChatTurn;
use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::event::ChatEvent;
use crate::generate::GenerationClient;

/// Successful translation: the generated reply plus the extended history.
///
/// The history is always the caller's input extended by exactly two turns,
/// `{user, message}` then `{assistant, response}`.
#[derive(Debug)]
pub struct ChatReply {
    pub response: String,
    pub conversation_history: Vec<Value>,
}

/// Stateless per-process relay. Shares nothing mutable between invocations;
/// the configuration is read-only after construction.
pub struct ChatRelay {
    config: RelayConfig,
    client: GenerationClient,
}

impl ChatRelay {
    pub fn new(config: RelayConfig) -> Self {
        let client = GenerationClient::new(config.inference_api_url.clone());
        Self { config, client }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Translate one chat event.
    pub async fn handle(&self, event: &ChatEvent) -> Result<ChatReply, RelayError> {
        // Short-circuit before any network activity.
        self.config.validate()?;

        if let Some(caller) = event.caller_identity() {
            info!(caller = %caller, "authenticated caller");
        }

        let (message, mut history) = parse_body(event)?;
        debug!(
            message_chars = message.len(),
            history_turns = history.len(),
            "relaying chat message"
        );

        let generated = self.client.generate(&message).await?;

        history.push(ChatTurn::user(message).into_value());
        history.push(ChatTurn::assistant(generated.clone()).into_value());

        Ok(ChatReply {
            response: generated,
            conversation_history: history,
        })
    }
}

/// Decode the event body: required `message`, optional `conversationHistory`.
///
/// The history is opaque — echoed back as-is, not schema-validated — and is
/// parsed exactly once.
fn parse_body(event: &ChatEvent) -> Result<(String, Vec<Value>), RelayError> {
    let raw = event
        .body
        .as_deref()
        .ok_or_else(|| RelayError::MalformedRequest("event carried no body".into()))?;

    let body: Value = serde_json::from_str(raw)
        .map_err(|e| RelayError::MalformedRequest(format!("body is not valid JSON: {e}")))?;

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .ok_or(RelayError::MissingField("message"))?
        .to_owned();

    let history = match body.get("conversationHistory") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(turns)) => turns.clone(),
        Some(_) => {
            return Err(RelayError::MalformedRequest(
                "conversationHistory must be an array".into(),
            ));
        }
    };

    Ok((message, history))
}
