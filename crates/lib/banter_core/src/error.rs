//! Relay error types.

use thiserror::Error;

/// Errors that can occur while translating a chat request.
///
/// Every variant is absorbed at the handler boundary and surfaced in the
/// failure envelope; none are retried and none cross the handler as a fault.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("inference request failed: {0}")]
    Transport(String),

    #[error("inference endpoint returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("unexpected inference response: {0}")]
    UnexpectedResponse(String),
}

impl RelayError {
    /// Stable machine-readable discriminant carried in the failure envelope
    /// alongside the human-readable error string.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Config(_) => "configuration",
            RelayError::MalformedRequest(_) => "malformed_request",
            RelayError::MissingField(_) => "missing_field",
            RelayError::Transport(_) => "transport",
            RelayError::Upstream { .. } => "upstream",
            RelayError::UnexpectedResponse(_) => "unexpected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_display_carries_status_and_body() {
        let err = RelayError::Upstream {
            status: 503,
            body: "model is loading".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("503"));
        assert!(rendered.contains("model is loading"));
    }

    #[test]
    fn kinds_are_stable() {
        assert_eq!(RelayError::Config("x".into()).kind(), "configuration");
        assert_eq!(RelayError::MissingField("message").kind(), "missing_field");
        assert_eq!(
            RelayError::Upstream {
                status: 500,
                body: String::new()
            }
            .kind(),
            "upstream"
        );
    }
}
