//! prefsync - Client-side preference synchronization for the web admin console
//!
//! This library keeps the console's user-interface preferences in sync:
//! it fetches them from the backend API, caches them in persistent local
//! storage, and keeps the active display language of the translation
//! catalog aligned with the backend value.
//!
//! ## Module Structure
//!
//! - [`api`] - Backend API client for fetching preferences
//! - [`cache`] - Persistent key-value local storage (browser localStorage analog)
//! - [`config`] - Runtime configuration (backend URL, fake-API mode)
//! - [`events`] - Action types and the synchronous dispatcher
//! - [`mod@i18n`] - Internationalization support and locale backends
//! - [`preferences`] - The preferences data model
//! - [`state`] - Shared in-memory application state
//! - [`sync`] - Preference synchronization engine wiring it all together

#[macro_use]
extern crate rust_i18n;

// Initialize i18n with translation files from the i18n directory
// Fallback to English if a translation is missing
i18n!("i18n", fallback = "en");

pub mod api;
pub mod cache;
pub mod config;
pub mod events;
pub mod i18n;
pub mod preferences;
pub mod state;
pub mod sync;
