#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Property-based tests for locale detection, validation and persistence.
//!
//! Arbitrary language tags and arbitrary stored values must never produce an
//! unsupported locale, and corrupted preferences must never survive `init`.

use std::sync::Arc;

use gitpen_i18n_core::types::{is_supported, validate_locale};
use gitpen_i18n_core::{
    detect_browser_language, I18nService, Locale, MemoryPreferenceStore, PreferenceStore,
    LOCALE_STORAGE_KEY,
};
use proptest::prelude::*;

fn supported_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["en", "ja", "zh-TW", "zh-CN"])
}

fn service_with(store: &Arc<MemoryPreferenceStore>) -> I18nService {
    I18nService::new(store.clone())
}

proptest! {
    #[test]
    fn detection_always_yields_supported_locale(tag in ".{0,24}") {
        let locale = detect_browser_language(Some(&tag));
        prop_assert!(is_supported(locale.code()));
        prop_assert_eq!(locale, detect_browser_language(Some(&tag)));
    }

    #[test]
    fn simplified_chinese_regions_map_to_zh_cn(region in "(SG|MY|CN)") {
        let tag = format!("zh-{region}");
        prop_assert_eq!(detect_browser_language(Some(&tag)), Locale::ZhCn);
    }

    #[test]
    fn traditional_script_maps_to_zh_tw(region in "[A-Z]{2}") {
        let tag = format!("zh-Hant-{region}");
        prop_assert_eq!(detect_browser_language(Some(&tag)), Locale::ZhTw);
    }

    #[test]
    fn japanese_prefix_maps_to_ja(rest in "[a-zA-Z0-9-]{0,12}") {
        let tag = format!("ja{rest}");
        prop_assert_eq!(detect_browser_language(Some(&tag)), Locale::Ja);
    }

    #[test]
    fn unrelated_languages_map_to_en(tag in "(en|fr|de|ko|pt|es|ru)(-[A-Z]{2})?") {
        prop_assert_eq!(detect_browser_language(Some(&tag)), Locale::En);
    }

    #[test]
    fn validation_accepts_exactly_supported_codes(value in ".{0,12}") {
        let expected = ["en", "ja", "zh-TW", "zh-CN"].contains(&value.as_str());
        prop_assert_eq!(validate_locale(&value), expected);
    }

    #[test]
    fn saved_locale_round_trips(code in supported_code()) {
        let store = Arc::new(MemoryPreferenceStore::new());
        let svc = service_with(&store);

        prop_assert!(svc.set_locale(code));
        prop_assert_eq!(svc.load_saved_locale().map(Locale::code), Some(code));
    }

    #[test]
    fn invalid_saved_values_are_removed_on_load(value in ".{0,16}") {
        prop_assume!(!validate_locale(&value));
        let store = Arc::new(MemoryPreferenceStore::with_entry(LOCALE_STORAGE_KEY, &value));
        let svc = service_with(&store);

        prop_assert_eq!(svc.load_saved_locale(), None);
        prop_assert_eq!(store.get(LOCALE_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn init_never_keeps_corrupted_preference(value in ".{0,16}", host in "[a-zA-Z-]{0,10}") {
        let store = Arc::new(MemoryPreferenceStore::with_entry(LOCALE_STORAGE_KEY, &value));
        let svc = service_with(&store);

        let locale = svc.init(Some(&host));
        let stored = store.get(LOCALE_STORAGE_KEY).unwrap();

        prop_assert!(svc.is_initialized());
        prop_assert_eq!(svc.current_locale(), locale);
        if validate_locale(&value) {
            prop_assert_eq!(stored.as_deref(), Some(value.as_str()));
        } else {
            prop_assert_eq!(locale, detect_browser_language(Some(&host)));
            prop_assert_eq!(stored.as_deref(), Some(locale.code()));
        }
    }

    #[test]
    fn translation_is_deterministic(key in "[a-z]{1,8}(\\.[a-zA-Z]{1,12}){0,3}", code in supported_code()) {
        let store = Arc::new(MemoryPreferenceStore::new());
        let svc = service_with(&store);
        let locale = Locale::from_code(code).unwrap();

        let first = svc.translate(&key, locale, &[]);
        prop_assert_eq!(&first, &svc.translate(&key, locale, &[]));
        prop_assert!(!first.is_empty());
    }
}
