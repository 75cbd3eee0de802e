//! Client-side theme state.
//!
//! DESIGN
//! ======
//! `theme` holds the value type shared by the switcher, the browser glue, and
//! the Leptos components.

pub mod theme;
