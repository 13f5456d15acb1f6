// @awa-component: GEN-InferenceClient
//
//! Text-generation endpoint client.
//!
//! One `POST` per chat message. The endpoint is treated as stateless: only
//! the latest message travels as the prompt, never the conversation history.
//! Sampling parameters are fixed constants, not caller input.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

pub const MAX_NEW_TOKENS: u32 = 512;
pub const DO_SAMPLE: bool = true;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    max_new_tokens: u32,
    do_sample: bool,
    temperature: f64,
    top_p: f64,
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            max_new_tokens: MAX_NEW_TOKENS,
            do_sample: DO_SAMPLE,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    generated_text: Option<String>,
}

/// HTTP client for the generation endpoint.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Generate a completion for `prompt`.
    ///
    /// Blocks (awaits) until the endpoint responds; no retries. A missing
    /// `generated_text` field in a 2xx response is a valid, if degenerate,
    /// success and yields an empty string.
    pub async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(RelayError::Upstream { status, body });
        }

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| RelayError::UnexpectedResponse(e.to_string()))?;

        Ok(data.generated_text.unwrap_or_default())
    }
}
