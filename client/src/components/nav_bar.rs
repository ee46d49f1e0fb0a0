//! Top navigation bar with page links and the language switch.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;
use crate::state::ui::UiState;
use crate::util::locale_pref;
use crate::util::storage::BrowserStorage;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |key: &'static str| ui.get().t(key);

    let on_switch_language = move |_| {
        ui.update(|s| s.locale = locale_pref::toggle(&BrowserStorage, s.locale));
    };

    view! {
        <nav class="nav-bar">
            <A href=routes::HOME attr:class="nav-bar__brand">
                {move || t("home.title")}
            </A>
            <div class="nav-bar__links">
                <A href=routes::CHAT attr:class="nav-bar__link">
                    {move || t("home.startChat")}
                </A>
                <A href=routes::SETTINGS attr:class="nav-bar__link">
                    {move || t("chat.settings")}
                </A>
                <button class="btn nav-bar__language" on:click=on_switch_language>
                    {move || t("common.switchLanguage")}
                </button>
            </div>
        </nav>
    }
}
