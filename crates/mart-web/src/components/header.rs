//! # Header Component
//!
//! Top bar with the menu toggle and the signed-in user.

use dioxus::prelude::*;

use crate::config::Config;
use crate::services::MenuServices;

/// Application header component.
///
/// `on_menu` fires when the hamburger button is pressed.
#[component]
pub fn Header(on_menu: EventHandler<()>) -> Element {
    let services = use_context::<MenuServices>();
    let config = use_context::<Config>();
    let username = services
        .session
        .current_user()
        .and_then(|user| user.username);

    rsx! {
        header {
            class: "app-header",

            button {
                class: "menu-toggle",
                "aria-label": "Open menu",
                onclick: move |_| on_menu.call(()),
                "☰"
            }

            h1 { "{config.brand_name}" }

            if let Some(username) = username {
                div { class: "user-menu",
                    div { class: "user-avatar",
                        "{username.chars().next().unwrap_or('?').to_uppercase()}"
                    }
                    span { class: "username", "{username}" }
                }
            }
        }
    }
}
