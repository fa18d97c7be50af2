//! Tests for internationalization support
//!
//! Tests cover:
//! - Language enum methods (locale_code, display_name, all)
//! - Locale code lookup, including primary-subtag fallback
//! - Serialization/deserialization
//! - Locale code format consistency

use prefsync::i18n::Language;

// ============================================
// Language Enum Basic Tests
// ============================================

#[test]
fn test_language_default_is_english() {
    assert_eq!(Language::default(), Language::English);
}

#[test]
fn test_language_english_locale_code() {
    assert_eq!(Language::English.locale_code(), "en");
}

#[test]
fn test_language_german_locale_code() {
    assert_eq!(Language::German.locale_code(), "de");
}

#[test]
fn test_language_portuguese_brazil_locale_code() {
    assert_eq!(Language::PortugueseBrazil.locale_code(), "pt-BR");
}

#[test]
fn test_language_display_names_are_native() {
    assert_eq!(Language::English.display_name(), "English");
    assert_eq!(Language::German.display_name(), "Deutsch");
    assert_eq!(Language::Spanish.display_name(), "Español");
    assert_eq!(Language::Russian.display_name(), "Русский");
}

#[test]
fn test_language_all_returns_all_languages() {
    let all = Language::all();
    assert_eq!(all.len(), 8);
    assert!(all.contains(&Language::English));
    assert!(all.contains(&Language::German));
    assert!(all.contains(&Language::Spanish));
    assert!(all.contains(&Language::French));
    assert!(all.contains(&Language::Italian));
    assert!(all.contains(&Language::Dutch));
    assert!(all.contains(&Language::PortugueseBrazil));
    assert!(all.contains(&Language::Russian));
}

#[test]
fn test_language_all_english_first() {
    // English should be first in the list as the default
    assert_eq!(Language::all()[0], Language::English);
}

// ============================================
// Locale Lookup Tests
// ============================================

#[test]
fn test_from_locale_code_exact_match() {
    assert_eq!(Language::from_locale_code("de"), Some(Language::German));
    assert_eq!(
        Language::from_locale_code("pt-BR"),
        Some(Language::PortugueseBrazil)
    );
}

#[test]
fn test_from_locale_code_primary_subtag_fallback() {
    assert_eq!(Language::from_locale_code("de-AT"), Some(Language::German));
    assert_eq!(Language::from_locale_code("en-GB"), Some(Language::English));
    assert_eq!(
        Language::from_locale_code("pt-PT"),
        Some(Language::PortugueseBrazil)
    );
}

#[test]
fn test_from_locale_code_underscore_separator() {
    // POSIX-style locales use underscores
    assert_eq!(Language::from_locale_code("fr_FR"), Some(Language::French));
}

#[test]
fn test_from_locale_code_unknown_language() {
    assert_eq!(Language::from_locale_code("ja"), None);
    assert_eq!(Language::from_locale_code(""), None);
}

// ============================================
// Serialization Tests
// ============================================

#[test]
fn test_language_serialize() {
    assert_eq!(
        serde_json::to_string(&Language::German).unwrap(),
        "\"German\""
    );
}

#[test]
fn test_language_roundtrip_serialization() {
    for lang in Language::all() {
        let json = serde_json::to_string(lang).unwrap();
        let deserialized: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(*lang, deserialized);
    }
}

// ============================================
// Locale Code Consistency Tests
// ============================================

#[test]
fn test_locale_codes_are_valid_bcp47() {
    for lang in Language::all() {
        let code = lang.locale_code();
        assert!(!code.is_empty(), "Locale code should not be empty");

        let parts: Vec<&str> = code.split('-').collect();
        assert!(
            parts.len() <= 2,
            "Locale code should have at most 2 parts: {:?}",
            code
        );

        assert_eq!(
            parts[0].len(),
            2,
            "Language code should be 2 characters: {:?}",
            code
        );
        assert!(
            parts[0].chars().all(|c| c.is_ascii_lowercase()),
            "Language code should be lowercase ASCII: {:?}",
            code
        );
    }
}

#[test]
fn test_all_languages_have_unique_locale_codes() {
    let all = Language::all();
    let codes: Vec<&str> = all.iter().map(|l| l.locale_code()).collect();

    let mut unique_codes = codes.clone();
    unique_codes.sort();
    unique_codes.dedup();

    assert_eq!(
        codes.len(),
        unique_codes.len(),
        "All locale codes should be unique"
    );
}

#[test]
fn test_all_languages_resolve_their_own_code() {
    for lang in Language::all() {
        assert_eq!(Language::from_locale_code(lang.locale_code()), Some(*lang));
    }
}

#[test]
fn test_all_languages_have_non_empty_display_names() {
    for lang in Language::all() {
        assert!(
            !lang.display_name().is_empty(),
            "Display name should not be empty for {:?}",
            lang
        );
    }
}
