//! # Services
//!
//! Collaborators the side menu delegates to, behind traits so the menu
//! actions can run against test doubles.
//!
//! - [`Navigator`] - client-side route changes
//! - [`SessionStore`] - current user lookup and sign-out
//! - [`Confirmer`] - blocking yes/no prompt
//! - [`Reloader`] - full application reload

pub mod browser;
mod router;

use std::rc::Rc;

pub use browser::{BrowserDialogs, BrowserReloader};
pub use router::RouterNavigator;

use crate::config::Config;
use crate::error::{MenuResult, PlatformError};
use crate::scroll_lock::ScrollLock;
use crate::session::{BrowserSession, User};

/// Performs client-side route changes.
pub trait Navigator {
    /// Requests navigation to `path`.
    fn navigate(&self, path: &str) -> MenuResult<()>;
}

/// Reads and clears the signed-in session.
pub trait SessionStore {
    /// Returns the signed-in user, or `None` when signed out.
    fn current_user(&self) -> Option<User>;

    /// Removes all stored session and auth state. Idempotent.
    fn clear_auth(&self) -> Result<(), PlatformError>;
}

/// Asks the user a blocking yes/no question.
pub trait Confirmer {
    /// Shows `message` and returns the user's choice.
    fn confirm(&self, message: &str) -> Result<bool, PlatformError>;
}

/// Restarts the application, discarding in-memory state.
pub trait Reloader {
    /// Triggers a full reload.
    fn reload(&self) -> Result<(), PlatformError>;
}

/// Shell-provided collaborators for the side menu.
///
/// Provided once by the application root via context.
#[derive(Clone)]
pub struct MenuServices {
    /// Session accessor.
    pub session: Rc<dyn SessionStore>,
    /// Logout confirmation prompt.
    pub confirmer: Rc<dyn Confirmer>,
    /// Page reload primitive.
    pub reloader: Rc<dyn Reloader>,
    /// Page-level scroll lock.
    pub scroll_lock: ScrollLock,
    /// Text of the logout confirmation prompt.
    pub logout_prompt: String,
}

impl MenuServices {
    /// Collaborators backed by the running browser.
    #[must_use]
    pub fn browser(config: &Config) -> Self {
        Self {
            session: Rc::new(BrowserSession::new(config)),
            confirmer: Rc::new(BrowserDialogs),
            reloader: Rc::new(BrowserReloader),
            scroll_lock: ScrollLock::for_document(),
            logout_prompt: config.logout_prompt.clone(),
        }
    }
}
