//! # page-theme
//!
//! Light/dark theme switching for web pages, compiled to WASM.
//!
//! On load the active theme is resolved from the persisted preference, falling
//! back to the system colour-scheme signal, and applied as a class on the page.
//! A manual toggle flips the class and persists the new choice.
//!
//! Page-wide resources (storage, DOM flag, media query) sit behind the
//! [`switcher::ThemeEnv`] seam so the decision logic runs against
//! [`util::memory_env::MemoryEnv`] in tests and against `BrowserEnv` in the
//! browser.

pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod switcher;
pub mod util;

#[cfg(feature = "standalone")]
mod entry;

pub use config::{FlagTarget, ThemeConfig, UnknownPreference};
pub use error::ThemeError;
pub use state::theme::{Theme, ThemeState};
pub use switcher::{ThemeEnv, initialize, initialize_with, toggle_theme};
