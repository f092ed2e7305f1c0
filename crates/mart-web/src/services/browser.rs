//! # Browser Services
//!
//! `web-sys` backed implementations of the menu collaborators.

use crate::error::PlatformError;

use super::{Confirmer, Reloader};

pub(crate) fn window() -> Result<web_sys::Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

pub(crate) fn body() -> Result<web_sys::HtmlElement, PlatformError> {
    window()?
        .document()
        .ok_or(PlatformError::NoDocument)?
        .body()
        .ok_or(PlatformError::NoBody)
}

fn local_storage() -> Result<web_sys::Storage, PlatformError> {
    window()?
        .local_storage()
        .map_err(PlatformError::js)?
        .ok_or(PlatformError::StorageUnavailable)
}

/// Reads a localStorage entry.
pub(crate) fn storage_get(key: &str) -> Result<Option<String>, PlatformError> {
    local_storage()?.get_item(key).map_err(PlatformError::js)
}

/// Removes a localStorage entry. Removing a missing key is a no-op.
pub(crate) fn storage_remove(key: &str) -> Result<(), PlatformError> {
    local_storage()?.remove_item(key).map_err(PlatformError::js)
}

/// Native browser dialogs (`window.confirm`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Confirmer for BrowserDialogs {
    fn confirm(&self, message: &str) -> Result<bool, PlatformError> {
        window()?
            .confirm_with_message(message)
            .map_err(PlatformError::js)
    }
}

/// Reloads the page through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserReloader;

impl Reloader for BrowserReloader {
    fn reload(&self) -> Result<(), PlatformError> {
        window()?.location().reload().map_err(PlatformError::js)
    }
}
