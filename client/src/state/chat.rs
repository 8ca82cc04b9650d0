//! Chat widget state and the message exchange flow.
//!
//! DESIGN
//! ======
//! `ChatState` owns an append-only `ChatLog` plus the widget chrome (open
//! flag, draft buffer). A send is split in two synchronous steps around the
//! single await point: `commit` appends the user message and clears the
//! draft, `resolve` appends the one assistant reply. `send_message` runs the
//! commit immediately and hands back the delivery future; the transport's
//! signature cannot fail, so every commit is matched by exactly one resolve.
//!
//! Sends are never queued or rejected while another is pending, and closing
//! the widget cancels nothing: a late reply still lands in the log.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::types::ChatReply;

/// Shown when the provider reports its quota as exhausted.
pub const QUOTA_EXCEEDED_TEXT: &str = "Our AI quota is currently exhausted. Please try again later.";

/// Shown for every other failure. Never includes provider detail.
pub const GENERIC_FAILURE_TEXT: &str = "Sorry, something went wrong on my end.";

/// One-tap canned questions offered above the message list.
pub const QUICK_QUESTIONS: [&str; 3] =
    ["How do I sell my license?", "What license types do you support?", "How long until I get paid?"];

// =============================================================================
// MESSAGES
// =============================================================================

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// A single immutable chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    id: String,
    text: String,
    origin: Origin,
}

impl ChatMessage {
    fn new(text: String, origin: Origin) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), text, origin }
    }

    /// Stable render key.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

/// Chronological, append-only message history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    fn append(&mut self, text: String, origin: Origin) {
        self.messages.push(ChatMessage::new(text, origin));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

// =============================================================================
// WIDGET STATE
// =============================================================================

/// State for the floating chat widget.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    log: ChatLog,
    is_open: bool,
    draft: String,
    pending: usize,
}

impl ChatState {
    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// `true` while at least one reply is outstanding.
    pub fn is_waiting(&self) -> bool {
        self.pending > 0
    }

    /// Flip the panel open/closed. History and draft survive closing.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Append `text` as a user message and clear the draft in one step.
    ///
    /// Returns the trimmed text to send, or `None` (and changes nothing) when
    /// `text` is blank.
    pub fn commit(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.log.append(text.to_owned(), Origin::User);
        self.draft.clear();
        self.pending += 1;
        Some(text.to_owned())
    }

    /// Append the assistant message answering one earlier `commit`.
    pub fn resolve(&mut self, reply: &ChatReply) {
        self.log.append(reply_text(reply), Origin::Assistant);
        self.pending = self.pending.saturating_sub(1);
    }
}

/// User-facing text for a classified reply.
pub fn reply_text(reply: &ChatReply) -> String {
    match reply {
        ChatReply::Answer { text } if !text.trim().is_empty() => text.trim().to_owned(),
        ChatReply::QuotaExceeded => QUOTA_EXCEEDED_TEXT.to_owned(),
        ChatReply::Answer { .. } | ChatReply::Failure => GENERIC_FAILURE_TEXT.to_owned(),
    }
}

// =============================================================================
// EXCHANGE
// =============================================================================

/// Delivers one user message and yields the classified reply.
///
/// Implementations fold every failure into [`ChatReply::Failure`]; there is
/// no error channel.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    async fn send(&self, message: &str) -> ChatReply;
}

impl<T: ChatTransport + ?Sized> ChatTransport for &T {
    async fn send(&self, message: &str) -> ChatReply {
        (**self).send(message).await
    }
}

/// Somewhere a `ChatState` can be mutated in place.
pub trait ChatStore {
    fn update_chat(&self, f: impl FnOnce(&mut ChatState));
}

impl<S: ChatStore + ?Sized> ChatStore for &S {
    fn update_chat(&self, f: impl FnOnce(&mut ChatState)) {
        (**self).update_chat(f);
    }
}

impl ChatStore for RwSignal<ChatState> {
    fn update_chat(&self, f: impl FnOnce(&mut ChatState)) {
        self.update(f);
    }
}

impl ChatStore for RefCell<ChatState> {
    fn update_chat(&self, f: impl FnOnce(&mut ChatState)) {
        f(&mut self.borrow_mut());
    }
}

/// Start one exchange for `text`.
///
/// The user message is committed (and the draft cleared) before this
/// returns. The returned future performs the single request and appends the
/// reply; the caller decides where it runs. Blank `text` commits nothing and
/// yields `None`.
pub fn send_message<S, T>(store: S, transport: T, text: &str) -> Option<impl Future<Output = ()> + use<S, T>>
where
    S: ChatStore,
    T: ChatTransport,
{
    let mut committed = None;
    store.update_chat(|chat| committed = chat.commit(text));
    let message = committed?;

    Some(async move {
        let reply = transport.send(&message).await;
        store.update_chat(|chat| chat.resolve(&reply));
    })
}
