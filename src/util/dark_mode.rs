//! Browser-backed theme environment.
//!
//! Reads and writes the preference in `localStorage`, queries
//! `prefers-color-scheme`, and toggles the dark-mode class on `<body>` (or
//! `<html>`). Requires a browser environment; without the `hydrate` feature the
//! helpers fall back to pure value logic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::ThemeConfig;
use crate::state::theme::Theme;

#[cfg(feature = "hydrate")]
pub use browser::BrowserEnv;

#[cfg(feature = "hydrate")]
mod browser {
    use crate::config::{FlagTarget, ThemeConfig};
    use crate::error::ThemeError;
    use crate::state::theme::Theme;
    use crate::switcher::ThemeEnv;

    /// [`ThemeEnv`] over the current window.
    #[derive(Clone, Debug, Default)]
    pub struct BrowserEnv {
        config: ThemeConfig,
    }

    impl BrowserEnv {
        pub fn new(config: ThemeConfig) -> Self {
            Self { config }
        }

        pub fn config(&self) -> &ThemeConfig {
            &self.config
        }

        fn storage(&self) -> Result<web_sys::Storage, ThemeError> {
            let window = web_sys::window()
                .ok_or_else(|| ThemeError::StorageUnavailable("no window".to_owned()))?;
            window
                .local_storage()
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))?
                .ok_or_else(|| ThemeError::StorageUnavailable("localStorage disabled".to_owned()))
        }

        fn class_list(&self) -> Result<web_sys::DomTokenList, ThemeError> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(ThemeError::DocumentUnavailable)?;
            let element: web_sys::Element = match self.config.target {
                FlagTarget::Body => document.body().ok_or(ThemeError::DocumentUnavailable)?.into(),
                FlagTarget::Root => document
                    .document_element()
                    .ok_or(ThemeError::DocumentUnavailable)?,
            };
            Ok(element.class_list())
        }
    }

    impl ThemeEnv for BrowserEnv {
        fn load_preference(&self) -> Result<Option<String>, ThemeError> {
            self.storage()?
                .get_item(&self.config.storage_key)
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
        }

        fn store_preference(&self, theme: Theme) -> Result<(), ThemeError> {
            self.storage()?
                .set_item(&self.config.storage_key, theme.as_str())
                .map_err(|e| ThemeError::StorageUnavailable(format!("{e:?}")))
        }

        fn system_prefers_dark(&self) -> bool {
            web_sys::window()
                .and_then(|w| w.match_media(&self.config.color_scheme_query).ok().flatten())
                .map_or(false, |mq| mq.matches())
        }

        fn is_dark(&self) -> bool {
            self.class_list()
                .map_or(false, |list| list.contains(&self.config.dark_class))
        }

        fn set_dark(&self, enabled: bool) -> Result<(), ThemeError> {
            let list = self.class_list()?;
            let result = if enabled {
                list.add_1(&self.config.dark_class)
            } else {
                list.remove_1(&self.config.dark_class)
            };
            result.map_err(|_| ThemeError::DocumentUnavailable)
        }

        fn toggle_dark(&self) -> Result<bool, ThemeError> {
            self.class_list()?
                .toggle(&self.config.dark_class)
                .map_err(|_| ThemeError::DocumentUnavailable)
        }
    }

    pub(super) fn current(config: &ThemeConfig) -> Theme {
        Theme::from_dark_flag(BrowserEnv::new(config.clone()).is_dark())
    }
}

/// Theme currently shown on the page.
pub fn current(config: &ThemeConfig) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        browser::current(config)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Theme::Light
    }
}

/// Toggle the page theme and persist it, returning the theme now shown.
///
/// On failure the page is left as it was and `current` is returned.
pub fn toggle(config: &ThemeConfig, current: Theme) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let env = BrowserEnv::new(config.clone());
        match crate::switcher::toggle_theme(&env) {
            Ok(theme) => theme,
            Err(err) => {
                log::warn!("theme toggle failed: {err}");
                current
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        current.flipped()
    }
}
