//! Theme initialization and toggling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosting entry point calls [`initialize`] exactly once per page load and
//! wires [`toggle_theme`] to the UI control. Both work against a [`ThemeEnv`]
//! so the same decision logic drives the browser and in-memory fakes.
//!
//! INVARIANT
//! =========
//! After either call returns `Ok`, the dark flag and the persisted value agree.

#[cfg(test)]
#[path = "switcher_test.rs"]
mod switcher_test;

use crate::config::UnknownPreference;
use crate::error::ThemeError;
use crate::state::theme::Theme;

/// Page-wide resources the switcher reads and mutates.
pub trait ThemeEnv {
    /// Persisted preference, `None` when nothing is stored.
    fn load_preference(&self) -> Result<Option<String>, ThemeError>;

    /// Overwrite the persisted preference.
    fn store_preference(&self, theme: Theme) -> Result<(), ThemeError>;

    /// Whether the system colour-scheme signal reports dark.
    fn system_prefers_dark(&self) -> bool;

    /// Whether the dark flag is currently present.
    fn is_dark(&self) -> bool;

    fn set_dark(&self, enabled: bool) -> Result<(), ThemeError>;

    /// Invert the dark flag and return whether it is now present.
    fn toggle_dark(&self) -> Result<bool, ThemeError>;
}

/// Resolve and apply the theme using the permissive unknown-value policy.
pub fn initialize<E: ThemeEnv + ?Sized>(env: &E) -> Result<Theme, ThemeError> {
    initialize_with(env, UnknownPreference::Light)
}

/// Resolve and apply the theme.
///
/// First match wins: a non-empty stored value (not rewritten), then the system
/// signal, then light. The last two persist what they chose; if that write
/// fails the flag is cleared before the error is returned.
pub fn initialize_with<E: ThemeEnv + ?Sized>(
    env: &E,
    policy: UnknownPreference,
) -> Result<Theme, ThemeError> {
    let stored = env.load_preference()?.filter(|value| !value.is_empty());

    if let Some(value) = stored {
        let theme = Theme::from_stored(&value, policy)?;
        env.set_dark(theme.is_dark())?;
        log::debug!("theme restored from storage: {theme} (stored {value:?})");
        return Ok(theme);
    }

    let theme = Theme::from_dark_flag(env.system_prefers_dark());
    env.set_dark(theme.is_dark())?;

    if let Err(err) = env.store_preference(theme) {
        log::warn!("failed to persist derived theme {theme}: {err}");
        restore_flag(env, false);
        return Err(err);
    }

    log::debug!("theme derived from system preference: {theme}");
    Ok(theme)
}

/// Flip the dark flag and persist the result.
///
/// If the write fails the flag is flipped back before the error is returned.
pub fn toggle_theme<E: ThemeEnv + ?Sized>(env: &E) -> Result<Theme, ThemeError> {
    let theme = Theme::from_dark_flag(env.toggle_dark()?);

    if let Err(err) = env.store_preference(theme) {
        log::warn!("failed to persist theme {theme}: {err}");
        restore_flag(env, !theme.is_dark());
        return Err(err);
    }

    log::debug!("theme toggled to {theme}");
    Ok(theme)
}

/// Put the flag back after a failed write. A failure here is logged so the
/// caller still sees the write error.
fn restore_flag<E: ThemeEnv + ?Sized>(env: &E, enabled: bool) {
    if let Err(err) = env.set_dark(enabled) {
        log::warn!("failed to restore dark flag to {enabled}: {err}");
    }
}
