//! LLM driver trait and implementations.
//!
//! The [`LlmDriver`] trait defines the single-turn text-generation interface
//! the summarizer builds on. The one shipped implementation,
//! [`GenerateDriver`], speaks the Ollama-style generate protocol: a JSON
//! `POST` of `{"model", "prompt", "stream": false}` answered by
//! `{"response": "..."}`.
//!
//! # Example
//!
//! ```rust,ignore
//! use memopad::llm::{GenerateDriver, LlmDriver, LlmSettings};
//!
//! let driver = GenerateDriver::new(LlmSettings {
//!     endpoint: "http://localhost:11434/api/generate".to_string(),
//!     model: "llama3".to_string(),
//! });
//! let summary = driver.generate("Summarize: ...").await?;
//! ```

pub mod generate;

pub use generate::GenerateDriver;

use url::Url;

/// LLM connection and model settings.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// Full URL of the generate endpoint.
    pub endpoint: String,
    /// Model identifier (e.g. `llama3`).
    pub model: String,
}

/// Trait for single-turn text-generation drivers.
#[async_trait::async_trait]
pub trait LlmDriver: Send + Sync {
    /// Generate a completion for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// unparseable response body.
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Validate a generate-endpoint URL.
///
/// The endpoint must parse as a URL with an `http` or `https` scheme.
pub fn validate_endpoint(endpoint: &str) -> anyhow::Result<Url> {
    let url = Url::parse(endpoint)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => anyhow::bail!("unsupported endpoint scheme: {other}"),
    }
}
