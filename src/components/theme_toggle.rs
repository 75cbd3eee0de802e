//! Theme context provider and dark-mode toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeProvider` exposes `ThemeConfig` and `RwSignal<ThemeState>` to
//! descendants; `ThemeToggle` flips the page theme and keeps the signal in step
//! so other components can restyle reactively.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::state::theme::ThemeState;

/// Provide theme config and state to child components.
///
/// Server and first client render both start from [`initial_state`]; the page
/// flag (already applied by the start hook) is read in an effect after mount
/// so hydration sees the same markup the server produced.
#[component]
pub fn ThemeProvider(
    #[prop(optional)] config: Option<ThemeConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let theme = RwSignal::new(initial_state());

    let page_config = config.clone();
    Effect::new(move |_| theme.set(page_state(&page_config)));

    provide_context(config);
    provide_context(theme);

    children()
}

/// State rendered before the page flag is known.
pub fn initial_state() -> ThemeState {
    ThemeState::default()
}

/// State matching the flag currently on the page.
pub fn page_state(config: &ThemeConfig) -> ThemeState {
    ThemeState::new(crate::util::dark_mode::current(config))
}

/// Button that toggles between dark and light themes.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let config = use_context::<ThemeConfig>().unwrap_or_default();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let current = theme.get().theme;
                let next = crate::util::dark_mode::toggle(&config, current);
                theme.update(|t| t.theme = next);
            }
            title="Toggle dark mode"
        >
            {move || theme.get().toggle_icon()}
        </button>
    }
}
