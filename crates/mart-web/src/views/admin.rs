//! Administrator pages.

use dioxus::prelude::*;

use super::Page;

#[component]
pub fn AdminUsers() -> Element {
    rsx! { Page { title: "Users", section: "admin" } }
}

#[component]
pub fn RedemptionRequests() -> Element {
    rsx! { Page { title: "Redemption Requests", section: "admin" } }
}

#[component]
pub fn ManageAds() -> Element {
    rsx! { Page { title: "Manage Ads", section: "admin" } }
}

#[component]
pub fn ManageOffers() -> Element {
    rsx! { Page { title: "Manage Offers", section: "admin" } }
}

#[component]
pub fn LiveCoupons() -> Element {
    rsx! { Page { title: "Manage Coupons", section: "admin" } }
}

#[component]
pub fn AdminProfile() -> Element {
    rsx! { Page { title: "Profile", section: "admin" } }
}
