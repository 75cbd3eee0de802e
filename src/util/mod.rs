//! Environment adapters for the theme switcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the decision
//! logic in `switcher` to keep it testable.

pub mod dark_mode;
pub mod memory_env;
