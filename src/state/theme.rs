//! Theme value type and reactive theme state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Theme` is what gets persisted (`"dark"` / `"light"`); `ThemeState` is the
//! copy components read through an `RwSignal` context.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::UnknownPreference;
use crate::error::ThemeError;

/// Visual presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted string for this theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Theme implied by the dark-mode presence flag.
    pub const fn from_dark_flag(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Interpret a non-empty stored value under `policy`.
    ///
    /// Only the exact string `"dark"` selects dark. Everything else is light
    /// unless the policy is [`UnknownPreference::Reject`] and the value is not
    /// exactly `"light"`.
    pub fn from_stored(value: &str, policy: UnknownPreference) -> Result<Self, ThemeError> {
        match (value.parse::<Self>(), policy) {
            (Ok(theme), _) => Ok(theme),
            (Err(_), UnknownPreference::Light) => Ok(Self::Light),
            (Err(err), UnknownPreference::Reject) => Err(err),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::UnrecognizedPreference(other.to_owned())),
        }
    }
}

/// Theme state shared with components.
///
/// Provided as `RwSignal<ThemeState>` by `ThemeProvider`; kept in step with
/// the page flag by whoever calls the toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub const fn is_dark(self) -> bool {
        self.theme.is_dark()
    }

    /// Icon for the toggle control: the theme a click switches to.
    pub const fn toggle_icon(self) -> &'static str {
        if self.is_dark() { "☀" } else { "☾" }
    }
}
