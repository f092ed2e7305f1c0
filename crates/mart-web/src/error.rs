//! # Errors
//!
//! Error types for browser collaborators and menu actions.

use thiserror::Error;

/// Errors raised by the browser platform (window, document, storage).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// No global `window` object is available.
    #[error("browser window is not available")]
    NoWindow,

    /// The window has no document.
    #[error("browser document is not available")]
    NoDocument,

    /// The document has no `<body>` element.
    #[error("document body is not available")]
    NoBody,

    /// localStorage is disabled or inaccessible.
    #[error("local storage is not available")]
    StorageUnavailable,

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl PlatformError {
    /// Wraps a thrown JavaScript value.
    pub(crate) fn js(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Errors that can occur while handling a menu selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The requested path does not match any application route.
    #[error("no route matches path {0:?}")]
    UnknownRoute(String),

    /// A browser collaborator failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Result type for menu actions.
pub type MenuResult<T> = Result<T, MenuError>;
