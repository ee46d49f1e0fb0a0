//! Assistant chat page: welcome line, example prompts and the local transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! Messages are kept in `ChatState` only. Clearing the chat also starts a new
//! chat id in the configuration store so the next conversation is a fresh
//! assistant session.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::routes;
use crate::state::chat::{Author, ChatState};
use crate::state::config::ConfigStore;
use crate::state::ui::UiState;

const EXAMPLE_KEYS: [&str; 4] = [
    "chat.examples.menu",
    "chat.examples.order",
    "chat.examples.price",
    "chat.examples.feedback",
];

#[component]
pub fn ChatPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<RwSignal<ConfigStore>>();
    let t = move |key: &'static str| ui.get().t(key);

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get_untracked();
        let mut added = false;
        chat.update(|s| added = s.push_user(&text));
        if added {
            input.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_clear = move |_| {
        chat.update(ChatState::clear);
        config.update(|c| {
            let chat_id = c.generate_new_chat_id();
            log::info!("started new chat session {chat_id}");
        });
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <Title text=routes::title_for(routes::CHAT)/>
        <NavBar/>
        <main class="chat-page">
            <header class="chat-page__header">
                <h1>{move || t("chat.title")}</h1>
                <span class="chat-page__session">
                    {move || t("settings.userConfig.chatId")} ": " {move || config.with(|c| c.chat_id().to_owned())}
                </span>
                <div class="chat-page__actions">
                    <button class="btn" on:click=on_clear>{move || t("chat.clear")}</button>
                    <A href=routes::SETTINGS attr:class="btn">{move || t("chat.settings")}</A>
                </div>
            </header>

            <div class="chat-page__messages">
                <div class=format!("chat-message chat-message--{}", Author::Assistant.css_modifier())>
                    {move || t("chat.welcome")}
                </div>
                <For
                    each=move || chat.get().messages
                    key=|msg| msg.id.clone()
                    children=|msg| {
                        view! {
                            <div class=format!("chat-message chat-message--{}", msg.author.css_modifier())>
                                {msg.content}
                            </div>
                        }
                    }
                />
            </div>

            <section class="chat-page__examples">
                <h2>{move || t("chat.examples.title")}</h2>
                {EXAMPLE_KEYS
                    .into_iter()
                    .map(move |key| {
                        view! {
                            <button class="chat-page__example" on:click=move |_| input.set(t(key).to_owned())>
                                {move || t(key)}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder=move || t("chat.placeholder")
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=move |_| do_send() disabled=move || !can_send()>
                    {move || t("chat.send")}
                </button>
            </div>
        </main>
    }
}
