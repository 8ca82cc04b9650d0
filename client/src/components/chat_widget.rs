//! Floating chat assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ChatState` from context and routes every send (typed draft or
//! quick question) through `state::chat::send_message`. The user message is
//! committed before the handler returns; the reply is awaited on a local
//! task so the page stays interactive. Closing the panel does not cancel it.

use leptos::prelude::*;

use crate::net::api::HttpChatTransport;
use crate::state::chat::{ChatMessage, ChatState, QUICK_QUESTIONS, send_message};
use crate::util::markdown::render_markdown_html;

/// Launcher button plus the collapsible chat panel.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.log().len(), c.is_waiting(), c.is_open()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = move |text: String| {
        if let Some(delivery) = send_message(chat, HttpChatTransport, &text) {
            leptos::task::spawn_local(delivery);
        }
    };

    let send_draft = move || send(chat.with_untracked(|c| c.draft().to_owned()));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_draft();
        }
    };

    let can_send = move || chat.with(|c| !c.draft().trim().is_empty());

    view! {
        <button
            class="chat-launcher"
            aria-label="Toggle chat"
            on:click=move |_| chat.update(ChatState::toggle_open)
        >
            {move || if chat.with(ChatState::is_open) { "✖️" } else { "💬" }}
        </button>

        <Show when=move || chat.with(ChatState::is_open)>
            <div class="chat-panel">
                <div class="chat-panel__header">
                    <h3 class="chat-panel__title">"SoftSell Help"</h3>
                    <button
                        class="chat-panel__close"
                        aria-label="Close chat"
                        on:click=move |_| chat.update(ChatState::close)
                    >
                        "✖️"
                    </button>
                </div>

                <div class="chat-panel__quick">
                    {QUICK_QUESTIONS
                        .into_iter()
                        .map(|question| {
                            view! {
                                <button class="chat-panel__chip" on:click=move |_| send(question.to_owned())>
                                    {question}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="chat-panel__messages" node_ref=messages_ref>
                    <For
                        each=move || chat.with(|c| c.log().messages().to_vec())
                        key=|msg| msg.id().to_owned()
                        children=|msg| view! { <ChatBubble msg/> }
                    />
                    {move || {
                        chat.with(ChatState::is_waiting)
                            .then(|| view! { <div class="chat-panel__typing">"Typing..."</div> })
                    }}
                </div>

                <div class="chat-panel__input-row">
                    <input
                        class="chat-panel__input"
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || chat.with(|c| c.draft().to_owned())
                        on:input=move |ev| chat.update(|c| c.set_draft(event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                    <button
                        class="btn btn--primary chat-panel__send"
                        on:click=move |_| send_draft()
                        disabled=move || !can_send()
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// One message. Assistant replies are rendered as Markdown.
#[component]
fn ChatBubble(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.is_user();
    let body = if is_user {
        view! { <span>{msg.text().to_owned()}</span> }.into_any()
    } else {
        let rendered = render_markdown_html(msg.text());
        view! { <div class="chat-bubble__markdown" inner_html=rendered></div> }.into_any()
    };

    view! {
        <div class="chat-row" class:chat-row--user=is_user>
            <div class="chat-bubble" class:chat-bubble--user=is_user>
                {body}
            </div>
        </div>
    }
}
