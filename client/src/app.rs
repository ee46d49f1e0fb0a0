//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::routes::{CHAT_ROUTE, HOME_ROUTE, ROOT_ROUTE, SETTINGS_ROUTE};
use crate::state::chat::ChatState;
use crate::state::config::{ConfigStore, DefaultReason, LoadOutcome};
use crate::state::ui::UiState;
use crate::util::locale_pref;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single configuration store for the session and provides it,
/// together with UI and chat state, to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = RwSignal::new(ConfigStore::browser());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(config);
    provide_context(ui);
    provide_context(chat);

    // Effects only run in the browser, so persisted settings are restored
    // after hydration and the server never mints a chat id.
    Effect::new(move || {
        config.update(|c| match c.load() {
            LoadOutcome::Loaded => log::info!("restored saved config, chat id {}", c.chat_id()),
            LoadOutcome::Defaulted(DefaultReason::Absent) => {
                log::info!("no saved config, using defaults, chat id {}", c.chat_id());
            }
            LoadOutcome::Defaulted(DefaultReason::Malformed(_)) => {
                log::warn!("saved config unreadable, using defaults, chat id {}", c.chat_id());
            }
        });
        ui.update(|s| s.locale = locale_pref::read_preference(&BrowserStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/milktea.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(ROOT_ROUTE.segment()) view=|| ROOT_ROUTE.render()/>
                <Route path=StaticSegment(HOME_ROUTE.segment()) view=|| HOME_ROUTE.render()/>
                <Route path=StaticSegment(CHAT_ROUTE.segment()) view=|| CHAT_ROUTE.render()/>
                <Route path=StaticSegment(SETTINGS_ROUTE.segment()) view=|| SETTINGS_ROUTE.render()/>
            </Routes>
        </Router>
    }
}
