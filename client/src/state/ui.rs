#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::{self, Locale};

/// UI-wide presentation state provided as context by `App`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub locale: Locale,
}

impl UiState {
    /// Resolve a display string in the current locale.
    pub fn t(&self, key: &'static str) -> &'static str {
        i18n::translate(self.locale, key)
    }
}
