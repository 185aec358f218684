//! Chatbot Component
//!
//! Keyword-driven campus assistant. A sent message gets its reply after
//! the bot delay; voice input fills the box with a sample question and
//! sends it; read-aloud pulses the bubble while "speaking".

use campus_core::Language;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::store::{self, ChatPanelState, ChatPanelStateStoreFields};

#[component]
pub fn Chatbot() -> impl IntoView {
    let state = Store::new(ChatPanelState::new());
    let (input, set_input) = signal(String::new());
    let end_ref = NodeRef::<html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        let _count = state.session().read().messages.len();
        if let Some(end) = end_ref.get() {
            end.scroll_into_view();
        }
    });

    let send = move |text: String| {
        let Some(language) = store::post_question(state, &text, commands::now()) else {
            return;
        };
        set_input.set(String::new());
        spawn_local(async move {
            let answer = commands::ask_assistant(text, language).await;
            store::deliver_reply(state, answer, commands::now());
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        send(input.get_untracked());
    };

    let on_voice = move |_| {
        if state.listening().get_untracked() {
            return;
        }
        state.listening().set(true);
        log::debug!("[CHAT] listening");
        spawn_local(async move {
            let heard = commands::capture_voice().await;
            state.listening().try_update(|listening| *listening = false);
            set_input.try_set(heard.clone());
            commands::voice_auto_send_pause().await;
            send(heard);
        });
    };

    let on_speak = move |id: u32, text: String| {
        state.speaking().set(Some(id));
        spawn_local(async move {
            commands::read_aloud(text).await;
            store::finish_speaking(state, id);
        });
    };

    let on_language = move |ev: web_sys::Event| match event_target_value(&ev).parse::<Language>() {
        Ok(language) => state.language().set(language),
        Err(e) => log::warn!("[CHAT] {}", e),
    };

    view! {
        <div class="card chat-card">
            <div class="chat-header">
                <div>
                    <h3 class="card-title">"Campus Assistant"</h3>
                    <p class="card-description">"Ask me anything about campus resources"</p>
                </div>
                <select
                    class="language-select"
                    prop:value=move || state.language().get().as_str()
                    on:change=on_language
                >
                    {Language::ALL.into_iter().map(|language| view! {
                        <option value=language.as_str()>{language.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="chat-messages">
                <For
                    each=move || state.session().get().messages
                    key=|message| message.id
                    children=move |message| {
                        let id = message.id;
                        let is_user = message.is_user();
                        let text = message.text.clone();
                        let bubble_class = move || {
                            let mut class = String::from(if is_user { "bubble bubble-user" } else { "bubble bubble-bot" });
                            if state.speaking().get() == Some(id) {
                                class.push_str(" pulse");
                            }
                            class
                        };
                        view! {
                            <div class=if is_user { "message-row user" } else { "message-row bot" }>
                                <div class=bubble_class>
                                    <p>{message.text.clone()}</p>
                                    <p class="message-meta">
                                        <span>{message.time_label()}</span>
                                        {(!is_user).then(|| view! {
                                            <button
                                                type="button"
                                                class="icon-btn tiny"
                                                title="Read aloud"
                                                on:click=move |_| on_speak(id, text.clone())
                                            >
                                                "🔊"
                                            </button>
                                        })}
                                    </p>
                                </div>
                            </div>
                        }
                    }
                />
                <div node_ref=end_ref></div>
            </div>

            <form class="chat-form" on:submit=on_submit>
                <button
                    type="button"
                    class=move || if state.listening().get() { "icon-btn outline listening" } else { "icon-btn outline" }
                    title="Voice input"
                    on:click=on_voice
                >
                    "🎤"
                </button>
                <input
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Send"</button>
            </form>
        </div>
    }
}
