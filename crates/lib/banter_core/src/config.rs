//! Relay configuration.

use crate::error::RelayError;

/// Fallback endpoint used when `INFERENCE_API_URL` is not set.
///
/// A loopback development address; deployments are expected to point this at
/// their own hosted generation endpoint.
pub const DEFAULT_INFERENCE_API_URL: &str = "http://127.0.0.1:8000/generate";

/// Configuration for the chat relay.
///
/// Built once at the boot seam and injected into [`crate::relay::ChatRelay`];
/// nothing reads the process environment on the request path.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    /// Text-generation endpoint receiving the `POST` per chat message.
    pub inference_api_url: String,
}

impl RelayConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable            | Default                              |
    /// |---------------------|--------------------------------------|
    /// | `INFERENCE_API_URL` | `http://127.0.0.1:8000/generate`     |
    pub fn from_env() -> Self {
        Self {
            inference_api_url: std::env::var("INFERENCE_API_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_API_URL.into()),
        }
    }

    /// Checks that a usable endpoint is configured.
    ///
    /// Runs per invocation so a misconfigured relay answers with the failure
    /// envelope instead of attempting (or refusing to boot around) a doomed
    /// outbound call.
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.inference_api_url.trim().is_empty() {
            return Err(RelayError::Config(
                "INFERENCE_API_URL is not set".into(),
            ));
        }
        url::Url::parse(&self.inference_api_url).map_err(|e| {
            RelayError::Config(format!(
                "INFERENCE_API_URL is not a valid URL: {e}"
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_validates() {
        let config = RelayConfig {
            inference_api_url: DEFAULT_INFERENCE_API_URL.into(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_endpoint_is_rejected() {
        let config = RelayConfig {
            inference_api_url: "  ".into(),
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn non_url_endpoint_is_rejected() {
        let config = RelayConfig {
            inference_api_url: "not a url".into(),
        };
        assert!(config.validate().is_err());
    }
}
