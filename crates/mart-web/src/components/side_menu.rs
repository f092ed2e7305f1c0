//! # Side Menu Component
//!
//! Slide-in navigation panel with a dismissing backdrop.

use dioxus::prelude::*;

use crate::config::Config;
use crate::menu::{self, menu_rows, select_menu_items, MenuRow, MenuStyles};
use crate::scroll_lock::use_scroll_lock;
use crate::services::{MenuServices, RouterNavigator};

/// Role-aware side navigation.
///
/// Visibility is owned by the parent: the menu only renders `is_open` and
/// asks to be closed through `on_close` (backdrop, close button, after a
/// navigation, after a confirmed logout). While open it holds the page
/// scroll lock.
///
/// # Structure
///
/// ```text
/// +------------------+------------------------+
/// | brand        [x] |                        |
/// |------------------|                        |
/// | item             |       overlay          |
/// | ---------------- |   (click to close)     |
/// | item             |                        |
/// |------------------|                        |
/// | logout           |                        |
/// +------------------+------------------------+
/// ```
#[component]
pub fn SideMenu(is_open: bool, on_close: EventHandler<()>) -> Element {
    let services = use_context::<MenuServices>();
    let config = use_context::<Config>();
    let router = RouterNavigator::new(navigator());

    use_scroll_lock(is_open, &services.scroll_lock);

    let user = services.session.current_user();
    let items = select_menu_items(user.as_ref());
    let styles = MenuStyles::for_state(is_open);

    let on_logout = move |_| {
        let result = menu::logout(
            services.confirmer.as_ref(),
            services.session.as_ref(),
            services.reloader.as_ref(),
            &services.logout_prompt,
            || on_close.call(()),
        );
        if let Err(e) = result {
            tracing::error!(error = %e, "Logout failed");
        }
    };

    let rows = menu_rows(items).into_iter().enumerate().map(|(index, row)| match row {
        MenuRow::Item(item) => {
            let router = router.clone();
            let path = item.path;
            rsx! {
                button {
                    key: "{path}",
                    class: "side-menu-item",
                    onclick: move |_| {
                        if let Err(e) = menu::select_item(&router, path, || on_close.call(())) {
                            tracing::error!(path, error = %e, "Navigation failed");
                        }
                    },
                    span { class: "side-menu-accent" }
                    span { class: "side-menu-icon", "{item.icon}" }
                    span { class: "side-menu-label", "{item.label}" }
                }
            }
        }
        MenuRow::Divider => rsx! {
            div { key: "divider-{index}", class: "side-menu-divider" }
        },
    });

    rsx! {
        div {
            class: "side-menu-overlay",
            style: styles.overlay,
            onclick: move |_| on_close.call(()),
        }

        aside {
            class: "side-menu",
            style: styles.panel,
            "aria-hidden": if is_open { "false" } else { "true" },

            div {
                class: "side-menu-header",

                div { class: "side-menu-brand",
                    p { "{config.brand_name}" }
                }

                button {
                    class: "side-menu-close",
                    "aria-label": "Close menu",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }

            div {
                class: "side-menu-content",

                nav { class: "side-menu-items", {rows} }

                div {
                    class: "side-menu-logout",

                    button {
                        class: "side-menu-item logout",
                        onclick: on_logout,
                        span { class: "side-menu-accent" }
                        span { class: "side-menu-icon", "🚪" }
                        span { class: "side-menu-label", "Logout" }
                    }
                }
            }
        }
    }
}
