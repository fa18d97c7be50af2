//! Backend API client for fetching preferences.
//!
//! The backend exposes the console preferences as a single JSON object.
//! Requests are blocking; callers that must not block run them from a
//! background thread.

use serde::de::DeserializeOwned;

use crate::preferences::Preferences;

/// Preferences endpoint, relative to the configured base URL
const PREFERENCES_ENDPOINT: &str = "/api/preferences";

const USER_AGENT: &str = concat!("prefsync/", env!("CARGO_PKG_VERSION"));

/// Errors produced by the backend client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success HTTP status
    #[error("backend returned HTTP {0}")]
    Status(u16),
    /// The request never completed, or the body was not valid JSON
    #[error("backend request failed: {0}")]
    Transport(#[from] ureq::Error),
}

/// Source of the current preferences.
///
/// The production implementation is [`HttpApi`]; tests substitute
/// counting or failing doubles to observe call behavior.
pub trait PreferencesApi {
    /// Fetch the current preferences from the backend
    fn get_preferences(&self) -> Result<Preferences, ApiError>;
}

/// Blocking HTTP client against the console backend
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    /// Create a client for the given base URL (e.g. `http://pi.hole`).
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Full URL of the preferences endpoint
    pub fn preferences_url(&self) -> String {
        format!("{}{}", self.base_url, PREFERENCES_ENDPOINT)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let mut response = match ureq::get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .call()
        {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(status)) => {
                return Err(ApiError::Status(status));
            }
            Err(e) => {
                return Err(ApiError::Transport(e));
            }
        };

        let value = response.body_mut().read_json()?;
        Ok(value)
    }
}

impl PreferencesApi for HttpApi {
    fn get_preferences(&self) -> Result<Preferences, ApiError> {
        self.get_json(&self.preferences_url())
    }
}
