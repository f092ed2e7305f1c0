//! # UI Components
//!
//! Shell components for the Puppy Digital Mart web client:
//! - [`Layout`] - Main application layout wrapper
//! - [`Header`] - Top bar with the menu toggle
//! - [`SideMenu`] - Role-aware slide-in navigation

mod header;
mod layout;
mod side_menu;

pub use header::Header;
pub use layout::Layout;
pub use side_menu::SideMenu;
