//! prefsync - Client-side preference synchronization for the web admin console
//!
//! Fetches the console's user-interface preferences from the backend,
//! caches them in local storage, and aligns the active display language
//! with the backend value. Configuration comes from the platform config
//! directory and `PREFSYNC_*` environment variables.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use prefsync::api::HttpApi;
use prefsync::cache::{LocalStore, WEB_PREFERENCES_STORAGE_KEY};
use prefsync::config::AppConfig;
use prefsync::i18n::{self, RustI18nBackend};
use prefsync::preferences::Preferences;
use prefsync::state::{self, AppState};
use prefsync::sync::PreferenceSync;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = AppConfig::load();
    info!(
        api = %config.api_base_url,
        fake_api = config.fake_api,
        "starting preference sync"
    );

    let store = LocalStore::open_default().context("could not open local preference storage")?;

    // Seed in-memory state from the cached copy so fake-API mode has
    // data before the first backend response arrives
    let cached: Option<Preferences> = store.get_json(WEB_PREFERENCES_STORAGE_KEY);
    let state = state::shared(AppState {
        preferences: cached.unwrap_or_default(),
    });

    // Start from the system locale until the backend says otherwise
    rust_i18n::set_locale(i18n::system_default().locale_code());

    let mut sync = PreferenceSync::new();
    sync.setup(
        &config,
        Box::new(HttpApi::new(&config.api_base_url)),
        store,
        Box::new(RustI18nBackend),
        Arc::clone(&state),
    );
    sync.run_until_idle()
        .context("preference synchronization failed")?;

    let language = state.lock().unwrap().preferences.language.clone();
    info!("{}", i18n::synced_message(&language));

    Ok(())
}
