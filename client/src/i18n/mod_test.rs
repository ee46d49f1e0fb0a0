use std::collections::BTreeSet;

use super::*;

fn keys(locale: Locale) -> BTreeSet<&'static str> {
    locale.table().iter().map(|(k, _)| *k).collect()
}

// =============================================================
// Table contracts
// =============================================================

#[test]
fn all_locales_expose_identical_keys() {
    let reference = keys(Locale::En);
    for locale in Locale::ALL {
        let current = keys(locale);
        let missing: Vec<_> = reference.difference(&current).collect();
        let extra: Vec<_> = current.difference(&reference).collect();
        assert!(missing.is_empty(), "{} is missing {missing:?}", locale.code());
        assert!(extra.is_empty(), "{} has extra {extra:?}", locale.code());
    }
}

#[test]
fn tables_have_no_duplicate_keys() {
    for locale in Locale::ALL {
        assert_eq!(keys(locale).len(), locale.table().len(), "duplicate key in {}", locale.code());
    }
}

#[test]
fn keys_live_under_known_namespaces() {
    const NAMESPACES: [&str; 4] = ["common.", "home.", "chat.", "settings."];
    for locale in Locale::ALL {
        for (key, _) in locale.table() {
            assert!(
                NAMESPACES.iter().any(|ns| key.starts_with(ns)),
                "{key} outside known namespaces"
            );
        }
    }
}

#[test]
fn every_namespace_is_populated() {
    let en = keys(Locale::En);
    for ns in ["common.", "home.", "chat.", "settings."] {
        assert!(en.iter().any(|k| k.starts_with(ns)), "no keys under {ns}");
    }
}

#[test]
fn values_are_non_empty() {
    for locale in Locale::ALL {
        for (key, value) in locale.table() {
            assert!(!value.trim().is_empty(), "{key} is empty in {}", locale.code());
        }
    }
}

// =============================================================
// translate
// =============================================================

#[test]
fn translate_resolves_per_locale() {
    assert_eq!(translate(Locale::En, "chat.send"), "Send");
    assert_eq!(translate(Locale::Zh, "chat.send"), "发送");
    assert_eq!(translate(Locale::En, "home.features.title"), "Service Features");
}

#[test]
fn translate_unknown_key_returns_key() {
    assert_eq!(translate(Locale::Zh, "chat.nonexistent"), "chat.nonexistent");
}

// =============================================================
// Locale
// =============================================================

#[test]
fn locale_default_is_chinese() {
    assert_eq!(Locale::default(), Locale::Zh);
}

#[test]
fn locale_from_code_accepts_region_tags() {
    assert_eq!(Locale::from_code("en"), Some(Locale::En));
    assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
    assert_eq!(Locale::from_code("ZH_cn"), Some(Locale::Zh));
    assert_eq!(Locale::from_code(" zh "), Some(Locale::Zh));
    assert_eq!(Locale::from_code("fr"), None);
    assert_eq!(Locale::from_code(""), None);
}

#[test]
fn locale_code_round_trips() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_code(locale.code()), Some(locale));
    }
}

#[test]
fn locale_toggle_flips() {
    assert_eq!(Locale::En.toggle(), Locale::Zh);
    assert_eq!(Locale::Zh.toggle(), Locale::En);
}
