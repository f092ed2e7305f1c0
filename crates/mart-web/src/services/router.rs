//! Router-backed [`Navigator`].

use std::str::FromStr;

use dioxus::prelude::*;

use crate::error::{MenuError, MenuResult};
use crate::router::Route;

use super::Navigator;

/// Pushes menu paths onto the Dioxus router history.
#[derive(Clone)]
pub struct RouterNavigator {
    navigator: dioxus::router::Navigator,
}

impl RouterNavigator {
    /// Wraps the navigator of the enclosing router.
    #[must_use]
    pub fn new(navigator: dioxus::router::Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) -> MenuResult<()> {
        let route = resolve_route(path)?;
        tracing::info!(path, "Navigating");
        if let Some(failure) = self.navigator.push(route) {
            return Err(MenuError::UnknownRoute(format!("{path} ({failure:?})")));
        }
        Ok(())
    }
}

/// Maps a menu path onto an application route.
///
/// Section roots are written with a trailing slash (`/user/`); routes are
/// declared without one.
pub(crate) fn resolve_route(path: &str) -> MenuResult<Route> {
    let normalized = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    Route::from_str(normalized).map_err(|_| MenuError::UnknownRoute(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{ADMIN_MENU_ITEMS, USER_MENU_ITEMS};

    #[test]
    fn test_every_menu_path_resolves() {
        for item in USER_MENU_ITEMS.iter().chain(ADMIN_MENU_ITEMS.iter()) {
            assert!(resolve_route(item.path).is_ok(), "{} has no route", item.path);
        }
    }

    #[test]
    fn test_section_roots_resolve_without_slash() {
        assert_eq!(resolve_route("/user/").unwrap(), Route::UserHome {});
        assert_eq!(resolve_route("/admin/").unwrap(), Route::AdminUsers {});
        assert_eq!(resolve_route("/user/profile").unwrap(), Route::UserProfile {});
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        assert_eq!(
            resolve_route("/nowhere"),
            Err(MenuError::UnknownRoute("/nowhere".to_string()))
        );
    }
}
