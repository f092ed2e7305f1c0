//! # Menu Actions
//!
//! What happens when a menu control is activated. The component wires
//! these to click handlers; tests drive them with recording doubles.

use crate::error::MenuResult;
use crate::services::{Confirmer, Navigator, Reloader, SessionStore};

/// Result of a logout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The user declined; nothing changed.
    Cancelled,
    /// The session was cleared and a reload was requested.
    LoggedOut,
}

/// Navigates to `path`, then asks the host to close the menu.
///
/// A navigation failure is returned before `on_close` runs.
pub fn select_item(
    navigator: &dyn Navigator,
    path: &str,
    on_close: impl FnOnce(),
) -> MenuResult<()> {
    navigator.navigate(path)?;
    on_close();
    Ok(())
}

/// Confirms, clears the session, closes the menu, then reloads the app.
pub fn logout(
    confirmer: &dyn Confirmer,
    session: &dyn SessionStore,
    reloader: &dyn Reloader,
    prompt: &str,
    on_close: impl FnOnce(),
) -> MenuResult<LogoutOutcome> {
    if !confirmer.confirm(prompt)? {
        tracing::debug!("Logout cancelled");
        return Ok(LogoutOutcome::Cancelled);
    }

    session.clear_auth()?;
    on_close();
    tracing::info!("Logged out, reloading");
    reloader.reload()?;
    Ok(LogoutOutcome::LoggedOut)
}
