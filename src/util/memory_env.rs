//! In-memory [`ThemeEnv`] for tests and non-browser hosts.

#[cfg(test)]
#[path = "memory_env_test.rs"]
mod memory_env_test;

use std::cell::{Cell, RefCell};

use crate::error::ThemeError;
use crate::state::theme::Theme;
use crate::switcher::ThemeEnv;

/// Storage, flag, and system signal held in plain cells.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    stored: RefCell<Option<String>>,
    dark: Cell<bool>,
    system_dark: bool,
    storage_disabled: Cell<bool>,
    writes_failing: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the persisted value.
    #[must_use]
    pub fn with_stored(self, value: impl Into<String>) -> Self {
        self.stored.replace(Some(value.into()));
        self
    }

    /// Set what the system colour-scheme signal reports.
    #[must_use]
    pub fn with_system_dark(mut self, enabled: bool) -> Self {
        self.system_dark = enabled;
        self
    }

    /// Start with the dark flag already present.
    #[must_use]
    pub fn with_dark_flag(self, enabled: bool) -> Self {
        self.dark.set(enabled);
        self
    }

    /// Make every storage call fail, as with disabled `localStorage`.
    #[must_use]
    pub fn with_storage_disabled(self) -> Self {
        self.storage_disabled.set(true);
        self
    }

    /// Make writes fail while reads keep working, as with an exceeded quota.
    #[must_use]
    pub fn with_writes_failing(self) -> Self {
        self.writes_failing.set(true);
        self
    }

    pub fn set_storage_disabled(&self, disabled: bool) {
        self.storage_disabled.set(disabled);
    }

    /// Current persisted value.
    pub fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }

    /// Number of successful storage writes.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    fn check_storage(&self) -> Result<(), ThemeError> {
        if self.storage_disabled.get() {
            return Err(ThemeError::StorageUnavailable("storage disabled".to_owned()));
        }
        Ok(())
    }
}

impl ThemeEnv for MemoryEnv {
    fn load_preference(&self) -> Result<Option<String>, ThemeError> {
        self.check_storage()?;
        Ok(self.stored())
    }

    fn store_preference(&self, theme: Theme) -> Result<(), ThemeError> {
        self.check_storage()?;
        if self.writes_failing.get() {
            return Err(ThemeError::StorageUnavailable("quota exceeded".to_owned()));
        }
        self.stored.replace(Some(theme.as_str().to_owned()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn system_prefers_dark(&self) -> bool {
        self.system_dark
    }

    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&self, enabled: bool) -> Result<(), ThemeError> {
        self.dark.set(enabled);
        Ok(())
    }

    fn toggle_dark(&self) -> Result<bool, ThemeError> {
        let next = !self.dark.get();
        self.dark.set(next);
        Ok(next)
    }
}
