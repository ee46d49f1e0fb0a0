//! Localized display strings.
//!
//! DESIGN
//! ======
//! Each language is a flat table of dotted keys (`chat.welcome`,
//! `settings.apiConfig.title`). Every table carries the same key set; the
//! parity is checked by the unit tests. Components resolve text through
//! `translate` with the locale held in `UiState`.

pub mod en;
pub mod zh;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    #[default]
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// BCP 47 primary language subtag.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parse a language tag such as `en`, `en-US` or `zh-CN`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }

    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => en::TABLE,
            Self::Zh => zh::TABLE,
        }
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve `key` for `locale`, falling back to English and then to the key.
pub fn translate(locale: Locale, key: &'static str) -> &'static str {
    lookup(locale.table(), key)
        .or_else(|| lookup(en::TABLE, key))
        .unwrap_or(key)
}
