//! AI guide chat.
//!
//! SYSTEM CONTEXT
//! ==============
//! Conversation state lives in the app-wide `RwSignal<ChatState>`, so the
//! thread survives navigating away and back. Each send carries the last
//! `AppConfig::chat_history_window` messages as context.

use catalog::ChatRole;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::MuseumApi;
use crate::state::chat::{ChatState, PRESETS};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn AssistantPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let api = expect_context::<MuseumApi>();
    let window = expect_context::<AppConfig>().chat_history_window;

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_key = Memo::new(move |_| chat.with(|c| (c.messages.len(), c.loading)));
    Effect::new(move || {
        scroll_key.track();
        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    // `Some(text)` sends a preset; `None` sends the input box.
    let send = Callback::new(move |preset: Option<String>| {
        let mut request = None;
        chat.update(|c| {
            if let Some(text) = preset {
                c.input = text;
            }
            request = c.begin_send(window);
        });
        let Some((prompt, history)) = request else {
            return;
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let reply = api.chat_with_ai(&prompt, &history).await.map_err(|e| e.to_string());
            if let Err(message) = &reply {
                leptos::logging::warn!("assistant request failed: {message}");
            }
            chat.update(|c| c.finish_send(reply));
        });
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send.run(None);
        }
    };

    let can_send = move || chat.with(|c| !c.loading && !c.input.trim().is_empty());

    view! {
        <div class="assistant-page">
            <h1 class="page-title">"AI Museum Guide"</h1>
            <div class="assistant-page__messages" node_ref=messages_ref>
                {move || {
                    chat.with(|c| {
                        c.messages
                            .iter()
                            .map(|entry| {
                                let is_assistant = entry.role == ChatRole::Assistant;
                                let body = if is_assistant {
                                    let rendered = render_markdown_html(&entry.content);
                                    view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
                                } else {
                                    view! { <span>{entry.content.clone()}</span> }.into_any()
                                };
                                view! {
                                    <div
                                        class="chat-message"
                                        class:chat-message--assistant=is_assistant
                                        class:chat-message--user={!is_assistant}
                                    >
                                        {body}
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
                <Show when=move || chat.with(|c| c.loading)>
                    <div class="chat-message chat-message--assistant chat-message--pending">"Thinking..."</div>
                </Show>
            </div>
            <Show when=move || chat.with(ChatState::show_presets)>
                <div class="assistant-page__presets">
                    {PRESETS
                        .iter()
                        .map(|(prompt, label)| {
                            let text = (*prompt).to_owned();
                            view! {
                                <button class="preset" on:click=move |_| send.run(Some(text.clone()))>
                                    <span class="preset__label">{*label}</span>
                                    <span class="preset__prompt">{*prompt}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
            <div class="assistant-page__input-row">
                <textarea
                    class="assistant-page__input"
                    rows="2"
                    placeholder="Ask about an artifact, a dynasty or a museum... (Shift+Enter for a new line)"
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        chat.update(|c| c.input = value);
                    }
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn btn--primary" disabled=move || !can_send() on:click=move |_| send.run(None)>
                    "Send"
                </button>
            </div>
        </div>
    }
}
