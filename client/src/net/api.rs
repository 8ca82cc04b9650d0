//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs answering `Failure`, since the chat endpoint is
//! only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network errors, non-OK statuses and undecodable bodies all collapse to
//! `ChatReply::Failure` and are logged to the console, so the chat log always
//! receives a reply and hydration never panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ChatReply;
#[cfg(feature = "hydrate")]
use super::types::ChatRequest;
use crate::state::chat::ChatTransport;

pub const CHAT_ENDPOINT: &str = "/api/chat";

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// Post one message to `/api/chat` and decode the classified reply.
pub async fn post_chat(message: &str) -> ChatReply {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest { message: message.to_owned() };
        let request = match gloo_net::http::Request::post(CHAT_ENDPOINT).json(&payload) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("chat request encode failed: {e}");
                return ChatReply::Failure;
            }
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("chat request failed: {e}");
                return ChatReply::Failure;
            }
        };
        if !resp.ok() {
            log::warn!("{}", chat_request_failed_message(resp.status()));
            return ChatReply::Failure;
        }
        resp.json::<ChatReply>().await.unwrap_or_else(|e| {
            log::warn!("chat reply decode failed: {e}");
            ChatReply::Failure
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        ChatReply::Failure
    }
}

/// [`ChatTransport`] backed by the server's chat endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpChatTransport;

impl ChatTransport for HttpChatTransport {
    async fn send(&self, message: &str) -> ChatReply {
        post_chat(message).await
    }
}
