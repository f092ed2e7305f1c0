//! # Puppy Digital Mart Web
//!
//! Browser client shell for Puppy Digital Mart.
//!
//! ## Architecture
//!
//! A Dioxus web application. The shell owns the side menu's open state and
//! the page scroll lock; the side menu reads the signed-in user's role from
//! the stored session and shows the customer or administrator navigation.
//!
//! ## Modules
//!
//! - [`components`] - Shell and side menu components
//! - [`config`] - Shell settings
//! - [`error`] - Platform and menu errors
//! - [`menu`] - Navigation lists, styles and actions
//! - [`router`] - Application routes
//! - [`scroll_lock`] - Page scroll lock resource
//! - [`services`] - Navigator, session, dialog and reload collaborators
//! - [`session`] - Stored user and role
//! - [`views`] - Route targets

use dioxus::prelude::*;
use tracing::Level;

mod components;
mod config;
mod error;
mod menu;
mod router;
mod scroll_lock;
mod services;
mod session;
mod views;

use config::Config;
use router::Route;
use services::MenuServices;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");

    tracing::info!("Starting Puppy Digital Mart");

    dioxus::launch(App);
}

/// Root application component.
///
/// Loads configuration, provides the side menu collaborators, loads the
/// stylesheet and renders the router.
#[component]
fn App() -> Element {
    let config = use_context_provider(Config::load);
    use_context_provider(|| MenuServices::browser(&config));

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
