//! # Views
//!
//! Route targets for the side menu destinations. Page content is served
//! by the product pages; these views only mark where each route lands.

mod admin;
mod user;

use dioxus::prelude::*;

pub use admin::{
    AdminProfile, AdminUsers, LiveCoupons, ManageAds, ManageOffers, RedemptionRequests,
};
pub use user::{UserHome, UserProfile, UserRedeem, UserWallet};

/// Titled page frame shared by the route targets.
#[component]
fn Page(title: &'static str, section: &'static str) -> Element {
    rsx! {
        section {
            class: "page",
            "data-section": section,

            h2 { class: "page-title", "{title}" }
        }
    }
}
