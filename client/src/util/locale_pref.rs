//! Language preference persistence.
//!
//! Reads the stored choice from `localStorage`, falling back to the browser's
//! `navigator.language` and finally to the default locale. Switching writes
//! the new choice back.

#[cfg(test)]
#[path = "locale_pref_test.rs"]
mod locale_pref_test;

use crate::i18n::Locale;
use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "milk-tea-locale";

/// Read the preferred locale.
pub fn read_preference<S: KeyValueStore>(storage: &S) -> Locale {
    if let Some(locale) = storage.get_item(STORAGE_KEY).as_deref().and_then(Locale::from_code) {
        return locale;
    }
    browser_language().unwrap_or_default()
}

/// Flip the locale and persist the new choice.
pub fn toggle<S: KeyValueStore>(storage: &S, current: Locale) -> Locale {
    let next = current.toggle();
    if let Err(e) = storage.set_item(STORAGE_KEY, next.code()) {
        log::debug!("locale preference not persisted: {e}");
    }
    next
}

fn browser_language() -> Option<Locale> {
    #[cfg(feature = "hydrate")]
    {
        let language = web_sys::window()?.navigator().language()?;
        Locale::from_code(&language)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
