//! Error taxonomy for theme resolution and persistence.

/// Failure raised while reading or applying the theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Persistent storage is missing, disabled, or a read/write call threw.
    #[error("theme storage unavailable: {0}")]
    StorageUnavailable(String),
    /// No window, document, or flag target element to style.
    #[error("document unavailable for theme flag")]
    DocumentUnavailable,
    /// A stored value was neither `"dark"` nor `"light"` and the policy rejects it.
    #[error("unrecognized stored theme: {0:?}")]
    UnrecognizedPreference(String),
    /// Host-supplied configuration could not be parsed.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}
