//! OpenAI-compatible chat completions client.
//!
//! Speaks `POST {base_url}/chat/completions` with bearer auth and returns
//! the first choice's message content. Any provider exposing the same wire
//! shape works through `LLM_OPENAI_BASE_URL`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmTimeouts;
use super::types::{LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn new(api_key: String, base_url: String, temperature: f32, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url, temperature })
    }

    pub async fn chat(&self, model: &str, messages: &[Message]) -> Result<String, LlmError> {
        let body = CcRequest { model, messages, temperature: self.temperature };
        let text = self.send_json("/chat/completions", &body).await?;
        parse_chat_completions_response(&text)
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The status alone decides the outcome; an unreadable body is logged empty.
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiResponse { status: status.as_u16(), body });
        }
        response.text().await.map_err(|e| LlmError::ApiRequest(e.to_string()))
    }
}

// =============================================================================
// CHAT COMPLETIONS WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Deserialize)]
struct CcResponse {
    choices: Vec<CcChoice>,
}

#[derive(Deserialize)]
struct CcChoice {
    message: CcResponseMessage,
}

#[derive(Deserialize)]
struct CcResponseMessage {
    content: Option<String>,
}

/// Extract `choices[0].message.content` from a chat completions body.
fn parse_chat_completions_response(text: &str) -> Result<String, LlmError> {
    let response: CcResponse = serde_json::from_str(text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ApiParse("response has no choices".into()))?;
    choice
        .message
        .content
        .ok_or_else(|| LlmError::ApiParse("first choice has no text content".into()))
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
