//! LLM completion adapter for the chat widget.
//!
//! DESIGN
//! ======
//! Configured purely from environment variables. `LlmClient` owns the model
//! name and delegates the HTTP exchange to the OpenAI-compatible chat
//! completions client. Callers depend on the `LlmChat` trait so tests can
//! swap in a mock.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client backed by a chat completions endpoint.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
}

impl LlmClient {
    /// Build an LLM client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let inner = openai::OpenAiClient::new(config.api_key, config.base_url, config.temperature, config.timeouts)?;
        Ok(Self { inner, model: config.model })
    }

    /// Return the configured model name (e.g. `"gpt-3.5-turbo"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
        self.inner.chat(&self.model, messages).await
    }
}
