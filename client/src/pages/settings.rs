//! Settings page for the backend address, user id and chat id.
//!
//! Saving applies all three drafts in one store update. An empty chat id
//! draft means "generate one", matching the placeholder text.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::nav_bar::NavBar;
use crate::routes;
use crate::state::config::ConfigStore;
use crate::state::ui::UiState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<RwSignal<ConfigStore>>();
    let t = move |key: &'static str| ui.get().t(key);

    let base_url = RwSignal::new(String::new());
    let user_id = RwSignal::new(String::new());
    let chat_id = RwSignal::new(String::new());
    let saved = RwSignal::new(false);

    // Keep drafts in sync with the store (initial load, saves, new chat ids).
    Effect::new(move || {
        let state = config.with(|c| c.state().clone());
        base_url.set(state.base_url);
        user_id.set(state.user_id);
        chat_id.set(state.chat_id);
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (base, user, chat) = (base_url.get_untracked(), user_id.get_untracked(), chat_id.get_untracked());
        config.update(|c| c.apply_settings(&base, &user, &chat));
        saved.set(true);
    };

    let api_url = move || config.with(|c| c.api_url());

    view! {
        <Title text=routes::title_for(routes::SETTINGS)/>
        <NavBar/>
        <main class="settings-page">
            <h1>{move || t("settings.title")}</h1>
            <form class="settings-form" on:submit=on_save>
                <fieldset class="settings-form__group">
                    <legend>{move || t("settings.apiConfig.title")}</legend>
                    <label class="settings-form__label">
                        {move || t("settings.apiConfig.baseUrl")}
                        <input
                            class="settings-form__input"
                            type="text"
                            placeholder=move || t("settings.apiConfig.baseUrlPlaceholder")
                            prop:value=move || base_url.get()
                            on:input=move |ev| {
                                saved.set(false);
                                base_url.set(event_target_value(&ev));
                            }
                        />
                    </label>
                    <p class="settings-form__hint">
                        {move || t("settings.apiConfig.apiUrl")} ": " <code>{api_url}</code>
                    </p>
                </fieldset>
                <fieldset class="settings-form__group">
                    <legend>{move || t("settings.userConfig.title")}</legend>
                    <label class="settings-form__label">
                        {move || t("settings.userConfig.userId")}
                        <input
                            class="settings-form__input"
                            type="text"
                            placeholder=move || t("settings.userConfig.userIdPlaceholder")
                            prop:value=move || user_id.get()
                            on:input=move |ev| {
                                saved.set(false);
                                user_id.set(event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="settings-form__label">
                        {move || t("settings.userConfig.chatId")}
                        <input
                            class="settings-form__input"
                            type="text"
                            placeholder=move || t("settings.userConfig.chatIdPlaceholder")
                            prop:value=move || chat_id.get()
                            on:input=move |ev| {
                                saved.set(false);
                                chat_id.set(event_target_value(&ev));
                            }
                        />
                    </label>
                </fieldset>
                <button class="btn btn--primary" type="submit">{move || t("common.save")}</button>
                <Show when=move || saved.get()>
                    <p class="settings-form__status">{move || t("common.success")}</p>
                </Show>
            </form>
        </main>
    }
}
