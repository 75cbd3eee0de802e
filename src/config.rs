//! Theme configuration supplied by the hosting page or application.
//!
//! DESIGN
//! ======
//! Every field has a default matching the stock page script (key `theme`,
//! class `dark-mode` on `<body>`), so hosts only override what differs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;

/// Storage key used for the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";
/// Class toggled on the flag target while dark styling is active.
pub const DEFAULT_DARK_CLASS: &str = "dark-mode";
/// Media query for the system colour-scheme signal.
pub const DEFAULT_COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Element that carries the dark-mode class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagTarget {
    /// The `<body>` element.
    #[default]
    Body,
    /// The document element (`<html>`).
    Root,
}

/// Policy for stored values other than `"dark"` and `"light"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownPreference {
    /// Treat the value as light and leave it in storage.
    #[default]
    Light,
    /// Fail initialization with [`ThemeError::UnrecognizedPreference`].
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub target: FlagTarget,
    pub color_scheme_query: String,
    pub unknown_preference: UnknownPreference,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            target: FlagTarget::Body,
            color_scheme_query: DEFAULT_COLOR_SCHEME_QUERY.to_owned(),
            unknown_preference: UnknownPreference::Light,
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON object; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }
}
