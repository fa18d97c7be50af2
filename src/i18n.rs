//! Internationalization support for the admin console.
//!
//! This module provides the language catalog, system locale detection,
//! and the seam through which the sync engine changes the active
//! display language.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Supported console languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    German,
    Spanish,
    French,
    Italian,
    Dutch,
    PortugueseBrazil,
    Russian,
}

impl Language {
    /// Get the locale code for rust-i18n
    pub fn locale_code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Dutch => "nl",
            Language::PortugueseBrazil => "pt-BR",
            Language::Russian => "ru",
        }
    }

    /// Get the display name for the language (in its native language)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::Italian => "Italiano",
            Language::Dutch => "Nederlands",
            Language::PortugueseBrazil => "Português (Brasil)",
            Language::Russian => "Русский",
        }
    }

    /// Get all available languages
    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::German,
            Language::Spanish,
            Language::French,
            Language::Italian,
            Language::Dutch,
            Language::PortugueseBrazil,
            Language::Russian,
        ]
    }

    /// Look up a language by locale code. Falls back to matching the
    /// primary subtag, so "de-AT" resolves to German.
    pub fn from_locale_code(code: &str) -> Option<Language> {
        let normalized = code.replace('_', "-");

        if let Some(lang) = Self::all().iter().find(|l| l.locale_code() == normalized) {
            return Some(*lang);
        }

        let primary = normalized.split('-').next()?;
        Self::all()
            .iter()
            .find(|l| {
                l.locale_code()
                    .split('-')
                    .next()
                    .is_some_and(|p| p == primary)
            })
            .copied()
    }
}

/// Language matching the system locale, defaulting to English
pub fn system_default() -> Language {
    sys_locale::get_locale()
        .and_then(|locale| Language::from_locale_code(&locale))
        .unwrap_or_default()
}

/// Readable and writable handle on the active display language.
///
/// The production implementation talks to the rust-i18n global locale;
/// tests substitute a recording double to observe change calls.
pub trait LocaleBackend {
    /// The currently active locale code
    fn current(&self) -> String;
    /// Switch the active locale
    fn change(&mut self, locale: &str);
}

/// rust-i18n backed locale handle
#[derive(Clone, Copy, Debug, Default)]
pub struct RustI18nBackend;

impl LocaleBackend for RustI18nBackend {
    fn current(&self) -> String {
        rust_i18n::locale().to_string()
    }

    fn change(&mut self, locale: &str) {
        rust_i18n::set_locale(locale);
        info!("display language changed to '{}'", locale);
    }
}

/// Localized summary line printed after a successful sync pass
pub fn synced_message(language: &str) -> String {
    t!("status.synced", language = language).into_owned()
}
