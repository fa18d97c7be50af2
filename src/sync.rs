//! The preference synchronization engine.
//!
//! Wires four listeners onto the dispatcher and kicks off the initial
//! fetch:
//!
//! 1. `fetch` answers a request action by producing preferences, either
//!    from the backend API or (in fake-API mode) from in-memory state,
//!    and publishes them as a success action.
//! 2. `cache` writes every success payload to persistent local storage
//!    under a fixed key.
//! 3. `apply-language` switches the active display language when the
//!    payload's language differs from the current one.
//! 4. `store` copies the payload into the shared in-memory state.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::{ApiError, PreferencesApi};
use crate::cache::{LocalStore, StoreError, WEB_PREFERENCES_STORAGE_KEY};
use crate::config::AppConfig;
use crate::events::{Action, ActionKind, Dispatcher};
use crate::i18n::LocaleBackend;
use crate::state::SharedState;

/// Errors surfaced while draining the action queue
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Preference synchronization engine.
///
/// Single-threaded and run-to-completion: callers dispatch actions and
/// drain the queue with [`run_until_idle`](Self::run_until_idle).
pub struct PreferenceSync {
    dispatcher: Dispatcher<SyncError>,
    installed: bool,
}

impl Default for PreferenceSync {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceSync {
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            installed: false,
        }
    }

    /// Register the preference listeners and queue the initial fetch.
    ///
    /// Calling this a second time is a logged no-op: listeners are
    /// registered once and no extra initial request is queued.
    pub fn setup(
        &mut self,
        config: &AppConfig,
        api: Box<dyn PreferencesApi>,
        store: LocalStore,
        locale: Box<dyn LocaleBackend>,
        state: SharedState,
    ) {
        if self.installed {
            warn!("preference sync already set up; ignoring repeated setup");
            return;
        }

        let fake_api = config.fake_api;
        let fetch_state = Arc::clone(&state);
        self.dispatcher.subscribe(
            ActionKind::PreferencesRequest,
            "fetch",
            Box::new(move |_action, outbox| {
                let preferences = if fake_api {
                    // Use the preferences already held in state
                    fetch_state.lock().unwrap().preferences.clone()
                } else {
                    api.get_preferences()?
                };
                outbox.put(Action::PreferencesSuccess(preferences));
                Ok(())
            }),
        );

        let cache_store = store.clone();
        self.dispatcher.subscribe(
            ActionKind::PreferencesSuccess,
            "cache",
            Box::new(move |action, _outbox| {
                if let Action::PreferencesSuccess(preferences) = action {
                    cache_store.set_json(WEB_PREFERENCES_STORAGE_KEY, preferences)?;
                    debug!("cached preferences under '{}'", WEB_PREFERENCES_STORAGE_KEY);
                }
                Ok(())
            }),
        );

        let mut locale = locale;
        self.dispatcher.subscribe(
            ActionKind::PreferencesSuccess,
            "apply-language",
            Box::new(move |action, _outbox| {
                if let Action::PreferencesSuccess(preferences) = action {
                    // Only change the language if it's different
                    if locale.current() != preferences.language {
                        info!("switching display language to '{}'", preferences.language);
                        locale.change(&preferences.language);
                    }
                }
                Ok(())
            }),
        );

        let store_state = state;
        self.dispatcher.subscribe(
            ActionKind::PreferencesSuccess,
            "store",
            Box::new(move |action, _outbox| {
                if let Action::PreferencesSuccess(preferences) = action {
                    store_state.lock().unwrap().preferences = preferences.clone();
                }
                Ok(())
            }),
        );

        self.installed = true;

        // Perform initial request
        self.dispatcher.dispatch(Action::PreferencesRequest);
        info!("preference listeners registered; initial fetch queued");
    }

    /// Queue another preferences fetch (UI-triggered refresh)
    pub fn request_refresh(&mut self) {
        self.dispatcher.dispatch(Action::PreferencesRequest);
    }

    /// Drain the action queue, surfacing the first listener error
    pub fn run_until_idle(&mut self) -> Result<(), SyncError> {
        self.dispatcher.run_until_idle()
    }

    /// Access to the underlying dispatcher (listener counts, queue depth)
    pub fn dispatcher(&self) -> &Dispatcher<SyncError> {
        &self.dispatcher
    }
}
