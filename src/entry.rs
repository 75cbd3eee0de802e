//! WASM entry points: theme setup on module start and the `toggleTheme()`
//! export for markup event handlers. Built only with the `standalone` feature.

use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::switcher::{self, ThemeEnv};
use crate::util::dark_mode::BrowserEnv;

/// Runs once when the module is instantiated.
///
/// If the theme cannot be resolved (storage disabled, unknown value under the
/// reject policy) the page is shown light and nothing is persisted.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = ThemeConfig::default();
    let policy = config.unknown_preference;
    let env = BrowserEnv::new(config);

    match switcher::initialize_with(&env, policy) {
        Ok(theme) => log::info!("theme applied: {theme}"),
        Err(err) => {
            log::warn!("theme init failed, defaulting to light: {err}");
            if let Err(err) = env.set_dark(false) {
                log::warn!("could not clear dark flag: {err}");
            }
        }
    }
}

/// Flip between dark and light and persist the choice.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    let env = BrowserEnv::new(ThemeConfig::default());
    if let Err(err) = switcher::toggle_theme(&env) {
        log::warn!("theme toggle failed: {err}");
    }
}
