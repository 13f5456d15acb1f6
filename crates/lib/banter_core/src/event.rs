// @zen-component: RELAY-EventEnvelope
//
//! Inbound event envelope.
//!
//! The relay is invoked with a gateway-style event: the chat request is a
//! JSON string under `body`, and an upstream identity layer may attach a
//! claims block under `requestContext.authorizer`. The claims are consumed
//! for observability only; the relay performs no authentication itself.

use serde::Deserialize;

/// The event delivered to the relay, as produced by the event source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEvent {
    /// JSON-encoded request body.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorizer {
    #[serde(default)]
    pub claims: Option<Claims>,
}

/// Identity claims populated by the upstream authorizer.
///
/// Only the human-readable identifier fields are modeled; any other claim
/// keys are ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "cognito:username")]
    pub username: Option<String>,
}

impl ChatEvent {
    /// Best-effort caller identifier: prefers `email`, falls back to
    /// `cognito:username`. Absence of the claims block is not an error.
    pub fn caller_identity(&self) -> Option<&str> {
        let claims = self
            .request_context
            .as_ref()?
            .authorizer
            .as_ref()?
            .claims
            .as_ref()?;
        claims.email.as_deref().or(claims.username.as_deref())
    }
}
