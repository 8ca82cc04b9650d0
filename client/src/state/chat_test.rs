use super::*;
use futures::executor::block_on;
use std::cell::Cell;

// =============================================================
// Test transport
// =============================================================

/// Replies with a fixed `ChatReply` and records what the store looked like
/// while the request was in flight.
struct ProbeTransport<'a> {
    store: &'a RefCell<ChatState>,
    reply: ChatReply,
    close_while_pending: bool,
    calls: Cell<usize>,
    sent: RefCell<Vec<String>>,
    in_flight: RefCell<Vec<(usize, String)>>,
}

impl<'a> ProbeTransport<'a> {
    fn new(store: &'a RefCell<ChatState>, reply: ChatReply) -> Self {
        Self {
            store,
            reply,
            close_while_pending: false,
            calls: Cell::new(0),
            sent: RefCell::new(Vec::new()),
            in_flight: RefCell::new(Vec::new()),
        }
    }
}

impl ChatTransport for ProbeTransport<'_> {
    async fn send(&self, message: &str) -> ChatReply {
        self.calls.set(self.calls.get() + 1);
        self.sent.borrow_mut().push(message.to_owned());
        {
            let chat = self.store.borrow();
            self.in_flight
                .borrow_mut()
                .push((chat.log().len(), chat.draft().to_owned()));
        }
        if self.close_while_pending {
            self.store.borrow_mut().close();
        }
        self.reply.clone()
    }
}

fn store_with_draft(draft: &str) -> RefCell<ChatState> {
    let mut state = ChatState::default();
    state.set_draft(draft.to_owned());
    RefCell::new(state)
}

/// Commit synchronously, then drive the delivery to completion.
fn run<S: ChatStore, T: ChatTransport>(store: S, transport: T, text: &str) {
    if let Some(delivery) = send_message(store, transport, text) {
        block_on(delivery);
    }
}

fn origins(state: &ChatState) -> Vec<Origin> {
    state.log().messages().iter().map(ChatMessage::origin).collect()
}

// =============================================================
// Defaults and toggling
// =============================================================

#[test]
fn chat_state_default_is_closed_and_empty() {
    let state = ChatState::default();
    assert!(state.log().is_empty());
    assert!(!state.is_open());
    assert_eq!(state.draft(), "");
    assert!(!state.is_waiting());
}

#[test]
fn toggle_open_keeps_history_and_draft() {
    let mut state = ChatState::default();
    state.toggle_open();
    assert!(state.is_open());
    state.commit("hello");
    state.resolve(&ChatReply::Answer { text: "hi".into() });
    state.set_draft("half-typed".into());

    state.toggle_open();
    assert!(!state.is_open());
    assert_eq!(state.log().len(), 2);
    assert_eq!(state.draft(), "half-typed");

    state.toggle_open();
    assert!(state.is_open());
    assert_eq!(state.log().len(), 2);
}

// =============================================================
// commit / resolve
// =============================================================

#[test]
fn commit_blank_text_changes_nothing() {
    let mut state = ChatState::default();
    state.set_draft("   ".into());
    assert_eq!(state.commit("   \n"), None);
    assert!(state.log().is_empty());
    assert_eq!(state.draft(), "   ");
    assert!(!state.is_waiting());
}

#[test]
fn commit_appends_trimmed_user_message_and_clears_draft() {
    let mut state = ChatState::default();
    state.set_draft("  How much?  ".into());
    assert_eq!(state.commit("  How much?  ").as_deref(), Some("How much?"));
    assert_eq!(state.draft(), "");
    assert!(state.is_waiting());
    let last = state.log().last().unwrap();
    assert!(last.is_user());
    assert_eq!(last.text(), "How much?");
}

#[test]
fn resolve_maps_replies_to_fixed_texts() {
    let mut state = ChatState::default();
    for _ in 0..4 {
        state.commit("q");
    }
    state.resolve(&ChatReply::Answer { text: "Sure.".into() });
    state.resolve(&ChatReply::QuotaExceeded);
    state.resolve(&ChatReply::Failure);
    state.resolve(&ChatReply::Answer { text: "  ".into() });

    let texts: Vec<&str> = state.log().messages()[4..].iter().map(ChatMessage::text).collect();
    assert_eq!(texts, ["Sure.", QUOTA_EXCEEDED_TEXT, GENERIC_FAILURE_TEXT, GENERIC_FAILURE_TEXT]);
    assert!(!state.is_waiting());
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::default();
    state.commit("same");
    state.commit("same");
    let msgs = state.log().messages();
    assert_ne!(msgs[0].id(), msgs[1].id());
}

// =============================================================
// send_message
// =============================================================

#[test]
fn send_message_appends_exactly_one_pair() {
    let store = store_with_draft("hello");
    let transport = ProbeTransport::new(&store, ChatReply::Answer { text: "Hello there".into() });

    run(&store, &transport, "hello");

    let state = store.borrow();
    assert_eq!(state.log().len(), 2);
    assert_eq!(origins(&state), [Origin::User, Origin::Assistant]);
    assert_eq!(state.log().messages()[0].text(), "hello");
    assert_eq!(state.log().messages()[1].text(), "Hello there");
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn user_message_lands_and_draft_clears_before_reply() {
    let store = store_with_draft("hello");
    let transport = ProbeTransport::new(&store, ChatReply::Failure);

    let delivery = send_message(&store, &transport, "hello").unwrap();
    {
        let state = store.borrow();
        assert_eq!(state.log().len(), 1);
        assert!(state.log().last().unwrap().is_user());
        assert_eq!(state.draft(), "");
        assert!(state.is_waiting());
    }
    assert_eq!(transport.calls.get(), 0);

    block_on(delivery);
    assert_eq!(transport.in_flight.borrow().as_slice(), [(1, String::new())]);
    assert_eq!(store.borrow().log().len(), 2);
}

#[test]
fn sends_are_not_queued_behind_a_pending_reply() {
    let store = store_with_draft("");
    let transport = ProbeTransport::new(&store, ChatReply::Answer { text: "ok".into() });

    let first = send_message(&store, &transport, "one").unwrap();
    let second = send_message(&store, &transport, "two").unwrap();
    assert_eq!(store.borrow().log().len(), 2);

    block_on(second);
    block_on(first);

    let state = store.borrow();
    assert_eq!(state.log().len(), 4);
    assert_eq!(origins(&state), [Origin::User, Origin::User, Origin::Assistant, Origin::Assistant]);
    assert!(!state.is_waiting());
}

#[test]
fn quota_reply_appends_quota_text() {
    let store = store_with_draft("hello");
    let transport = ProbeTransport::new(&store, ChatReply::QuotaExceeded);

    run(&store, &transport, "hello");

    let state = store.borrow();
    assert_eq!(state.log().last().unwrap().text(), QUOTA_EXCEEDED_TEXT);
    assert_eq!(state.log().last().unwrap().origin(), Origin::Assistant);
}

#[test]
fn failure_reply_appends_generic_text_and_draft_stays_empty() {
    let store = store_with_draft("hello");
    let transport = ProbeTransport::new(&store, ChatReply::Failure);

    run(&store, &transport, "hello");

    let state = store.borrow();
    assert_eq!(state.log().len(), 2);
    assert_eq!(state.log().last().unwrap().text(), GENERIC_FAILURE_TEXT);
    assert_eq!(state.draft(), "");
}

#[test]
fn blank_send_issues_no_request() {
    let store = store_with_draft("");
    let transport = ProbeTransport::new(&store, ChatReply::Failure);

    run(&store, &transport, " \t ");

    assert_eq!(transport.calls.get(), 0);
    assert!(store.borrow().log().is_empty());
}

#[test]
fn quick_question_twice_gives_two_pairs() {
    let store = store_with_draft("");
    let transport = ProbeTransport::new(&store, ChatReply::Answer { text: "Upload it.".into() });

    run(&store, &transport, QUICK_QUESTIONS[0]);
    run(&store, &transport, QUICK_QUESTIONS[0]);

    let state = store.borrow();
    assert_eq!(state.log().len(), 4);
    assert_eq!(origins(&state), [Origin::User, Origin::Assistant, Origin::User, Origin::Assistant]);
    assert_eq!(transport.sent.borrow().as_slice(), [QUICK_QUESTIONS[0], QUICK_QUESTIONS[0]]);
}

#[test]
fn reply_after_close_is_still_appended() {
    let store = store_with_draft("hello");
    store.borrow_mut().toggle_open();
    let mut transport = ProbeTransport::new(&store, ChatReply::Answer { text: "late".into() });
    transport.close_while_pending = true;

    run(&store, &transport, "hello");

    let state = store.borrow();
    assert!(!state.is_open());
    assert_eq!(state.log().last().unwrap().text(), "late");
}

#[test]
fn rw_signal_is_a_chat_store() {
    let owner = Owner::new();
    owner.set();
    let chat = RwSignal::new(ChatState::default());
    chat.update_chat(|c| {
        c.commit("hi");
    });
    assert_eq!(chat.with_untracked(|c| c.log().len()), 1);
}
