//! Chat exchange service: one user question in, one classified reply out.
//!
//! DESIGN
//! ======
//! Each request is stateless: the provider sees the persona instruction and
//! the single current user message, never earlier turns. The provider result
//! is folded into a `ChatOutcome` by the pure `classify` function, then
//! flattened to the wire `ChatReply`. Failure reasons stay in the logs; the
//! browser only learns that the exchange failed.

use std::sync::Arc;

use softsell_client::net::types::ChatReply;
use tracing::{info, warn};
use uuid::Uuid;

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};
use crate::state::AppState;

/// Persona instruction sent as the system turn of every request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for SoftSell.";

const LOG_BODY_LIMIT: usize = 512;

// =============================================================================
// TYPES
// =============================================================================

/// Why an exchange produced the generic failure reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No LLM client is configured on this server.
    NotConfigured,
    /// The request never produced a response.
    Transport,
    /// The provider answered with a non-success, non-quota status.
    UnexpectedStatus(u16),
    /// The body did not have the expected shape, or had no usable text.
    Parse,
}

/// Classified result of one provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Trimmed, non-empty completion text.
    Success(String),
    QuotaExceeded,
    Failure(FailureReason),
}

impl From<ChatOutcome> for ChatReply {
    fn from(outcome: ChatOutcome) -> Self {
        match outcome {
            ChatOutcome::Success(text) => Self::Answer { text },
            ChatOutcome::QuotaExceeded => Self::QuotaExceeded,
            ChatOutcome::Failure(_) => Self::Failure,
        }
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Fold a provider result into the 3-way outcome policy.
///
/// Precedence: transport failure, then quota status, then any other status
/// or parse problem, then success. Completion text is trimmed; text that is
/// blank after trimming counts as a parse failure so every reply carries
/// something to show.
#[must_use]
pub fn classify(result: Result<String, LlmError>) -> ChatOutcome {
    match result {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                ChatOutcome::Failure(FailureReason::Parse)
            } else {
                ChatOutcome::Success(trimmed.to_owned())
            }
        }
        Err(LlmError::ApiRequest(_) | LlmError::HttpClientBuild(_)) => ChatOutcome::Failure(FailureReason::Transport),
        Err(e) if e.is_quota_exceeded() => ChatOutcome::QuotaExceeded,
        Err(LlmError::ApiResponse { status, .. }) => ChatOutcome::Failure(FailureReason::UnexpectedStatus(status)),
        Err(LlmError::ApiParse(_)) => ChatOutcome::Failure(FailureReason::Parse),
        Err(LlmError::ConfigParse(_) | LlmError::MissingApiKey { .. }) => {
            ChatOutcome::Failure(FailureReason::NotConfigured)
        }
    }
}

/// Build the request messages: persona, then the single user turn.
#[must_use]
pub fn build_messages(text: &str) -> Vec<Message> {
    vec![Message::system(SYSTEM_PROMPT), Message::user(text)]
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Run one exchange for `text` and return its classified outcome.
///
/// Never fails: every path ends in exactly one outcome.
pub async fn handle_message(state: &AppState, text: &str) -> ChatOutcome {
    let exchange_id = Uuid::new_v4();
    info!(%exchange_id, prompt_len = text.len(), "chat: message received");

    let Some(llm) = state.llm.as_ref() else {
        warn!(%exchange_id, "chat: LLM not configured");
        return ChatOutcome::Failure(FailureReason::NotConfigured);
    };

    let outcome = exchange(llm, text).await;
    match &outcome {
        ChatOutcome::Success(reply) => info!(%exchange_id, reply_len = reply.len(), "chat: answered"),
        ChatOutcome::QuotaExceeded => warn!(%exchange_id, "chat: provider quota exceeded"),
        ChatOutcome::Failure(reason) => warn!(%exchange_id, ?reason, "chat: exchange failed"),
    }
    outcome
}

async fn exchange(llm: &Arc<dyn LlmChat>, text: &str) -> ChatOutcome {
    let messages = build_messages(text);
    let result = llm.complete(&messages).await;
    if let Err(e) = &result {
        log_provider_error(e);
    }
    classify(result)
}

fn log_provider_error(err: &LlmError) {
    match err {
        LlmError::ApiResponse { status, body } => {
            warn!(code = err.error_code(), status, body = truncate(body, LOG_BODY_LIMIT), "chat: provider error");
        }
        other => warn!(code = other.error_code(), error = %other, "chat: provider error"),
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
