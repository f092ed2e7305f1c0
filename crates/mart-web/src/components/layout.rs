//! # Layout Component
//!
//! Application shell hosting the header, the side menu and the routed view.

use dioxus::prelude::*;

use super::{Header, SideMenu};
use crate::router::Route;

/// Main layout wrapper component.
///
/// Owns the side menu's open state. All routed views are rendered inside
/// the main content area via `Outlet`.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | [=]            Header                       |
/// |---------------------------------------------|
/// |                                             |
/// |               Main Content                  |
/// |               (Outlet)                      |
/// |                                             |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        div {
            class: "app-layout",

            Header { on_menu: move |_| menu_open.set(true) }

            SideMenu {
                is_open: menu_open(),
                on_close: move |_| menu_open.set(false),
            }

            main {
                class: "content",

                Outlet::<Route> {}
            }
        }
    }
}
