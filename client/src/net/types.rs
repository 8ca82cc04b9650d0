//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server depends on this crate (with `ssr`) and serializes these same
//! types, so the chat endpoint's schema lives in exactly one place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The single user message for this exchange.
    pub message: String,
}

/// Classified reply from `POST /api/chat`.
///
/// Failure carries no detail: provider errors never reach the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ChatReply {
    /// The model answered; `text` is trimmed and non-empty.
    Answer { text: String },
    /// The provider reported its quota or rate limit as exhausted.
    QuotaExceeded,
    /// Anything else went wrong.
    Failure,
}
