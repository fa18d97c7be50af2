//! The preferences data model.
//!
//! Preferences are a small JSON record owned by the backend. The client
//! treats them as mostly opaque: the fields it understands are typed,
//! everything else is carried through unchanged so that caching and
//! re-serialization never lose data added by newer backend versions.

use serde::{Deserialize, Serialize};

/// Language used when the backend does not specify one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Page layout of the admin console
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Content constrained to a centered box
    #[default]
    Boxed,
    /// Full-width layout
    Traditional,
}

/// User-interface preferences as served by the backend API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Console page layout
    #[serde(default)]
    pub layout: Layout,
    /// Active display language (BCP 47 locale code, e.g. "en" or "pt-BR")
    #[serde(default = "default_language")]
    pub language: String,
    /// Backend fields this client does not interpret, preserved verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            language: default_language(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Preferences {
    /// Build preferences with the given language and default layout
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Self::default()
        }
    }
}
