//! # Routing
//!
//! Application routes. Every side menu destination has a route here.

use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{
    AdminProfile, AdminUsers, LiveCoupons, ManageAds, ManageOffers, RedemptionRequests,
    UserHome, UserProfile, UserRedeem, UserWallet,
};

/// Application routes.
///
/// All routes are wrapped in the [`Layout`] component which hosts the
/// header and the side menu.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::UserHome {})]
    #[layout(Layout)]
        /// Customer dashboard.
        #[route("/user")]
        UserHome {},

        #[route("/user/profile")]
        UserProfile {},

        /// Point balance and history.
        #[route("/user/wallet")]
        UserWallet {},

        /// Coupon redemption.
        #[route("/user/redeem")]
        UserRedeem {},

        /// User management.
        #[route("/admin")]
        AdminUsers {},

        /// Pending redemption requests.
        #[route("/admin/redeemreq")]
        RedemptionRequests {},

        #[route("/admin/manageAds")]
        ManageAds {},

        #[route("/admin/manageOffers")]
        ManageOffers {},

        /// Coupons currently live.
        #[route("/admin/liveCoupons")]
        LiveCoupons {},

        #[route("/admin/profile")]
        AdminProfile {},
}
