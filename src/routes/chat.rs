//! Chat proxy route.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use softsell_client::net::types::{ChatReply, ChatRequest};

use crate::services::chat;
use crate::state::AppState;

/// `POST /api/chat`: forward one user message to the LLM.
///
/// Always answers `200` with a tagged [`ChatReply`] once a message is
/// accepted; provider failures are part of the reply, not the status.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, StatusCode> {
    let text = request.message.trim();
    if text.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let outcome = chat::handle_message(&state, text).await;
    Ok(Json(outcome.into()))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
