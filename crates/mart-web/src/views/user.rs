//! Customer pages.

use dioxus::prelude::*;

use super::Page;

#[component]
pub fn UserHome() -> Element {
    rsx! { Page { title: "Home", section: "user" } }
}

#[component]
pub fn UserProfile() -> Element {
    rsx! { Page { title: "Profile", section: "user" } }
}

#[component]
pub fn UserWallet() -> Element {
    rsx! { Page { title: "Wallet", section: "user" } }
}

#[component]
pub fn UserRedeem() -> Element {
    rsx! { Page { title: "Redemption", section: "user" } }
}
