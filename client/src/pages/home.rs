//! Landing page introducing the shop assistant and its services.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::nav_bar::NavBar;
use crate::routes;
use crate::state::ui::UiState;

const FEATURE_KEYS: [&str; 4] = [
    "home.features.consult",
    "home.features.order",
    "home.features.feedback",
    "home.features.support",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |key: &'static str| ui.get().t(key);

    view! {
        <Title text=routes::title_for(routes::HOME)/>
        <NavBar/>
        <main class="home-page">
            <section class="home-hero">
                <h1>{move || t("home.title")}</h1>
                <p class="home-hero__subtitle">{move || t("home.subtitle")}</p>
                <p class="home-hero__description">{move || t("home.description")}</p>
                <A href=routes::CHAT attr:class="btn btn--primary">
                    {move || t("home.startChat")}
                </A>
            </section>
            <section class="home-features">
                <h2>{move || t("home.features.title")}</h2>
                <ul class="home-features__list">
                    {FEATURE_KEYS
                        .into_iter()
                        .map(move |key| view! { <li class="home-features__item">{move || t(key)}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        </main>
    }
}
