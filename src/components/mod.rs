//! Leptos components for theme switching.

pub mod theme_toggle;
