//! Ollama-style generate-endpoint driver.

use serde::{Deserialize, Serialize};

use super::{LlmDriver, LlmSettings};

/// Request body for the generate endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body from the generate endpoint.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Driver for Ollama-style generate endpoints.
///
/// Posts the whole prompt in one request with streaming disabled; the
/// summarizer has no use for partial output.
#[derive(Clone)]
pub struct GenerateDriver {
    http: reqwest::Client,
    settings: LlmSettings,
}

impl std::fmt::Debug for GenerateDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateDriver")
            .field("settings", &self.settings)
            .finish()
    }
}

impl GenerateDriver {
    /// Create a new driver with the given settings.
    #[must_use]
    pub fn new(settings: LlmSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }
}

#[async_trait::async_trait]
impl LlmDriver for GenerateDriver {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let body = GenerateRequest {
            model: &self.settings.model,
            prompt,
            stream: false,
        };

        let resp = self
            .http
            .post(&self.settings.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let data: GenerateResponse = resp.json().await?;
        Ok(data.response)
    }
}
