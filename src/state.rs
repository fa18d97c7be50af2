//! Shared in-memory application state.
//!
//! The state holds the last known preferences. The sync engine's store
//! listener keeps it current on every success action, and the fake-API
//! fetch path reads its preferences from here instead of calling the
//! backend.

use std::sync::{Arc, Mutex};

use crate::preferences::Preferences;

/// In-memory application state
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Last known preferences
    pub preferences: Preferences,
}

impl AppState {
    /// State seeded with the given preferences
    pub fn with_preferences(preferences: Preferences) -> Self {
        Self { preferences }
    }
}

/// Handle shared between the sync engine and its host application
pub type SharedState = Arc<Mutex<AppState>>;

/// Wrap state for sharing
pub fn shared(state: AppState) -> SharedState {
    Arc::new(Mutex::new(state))
}
