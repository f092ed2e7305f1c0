//! # Side Menu Model
//!
//! Rendering-independent parts of the side menu:
//! - [`items`] - navigation lists and role-based selection
//! - [`styles`] - open/closed inline styles
//! - [`actions`] - navigation and logout flows

pub mod actions;
pub mod items;
pub mod styles;

pub use actions::{logout, select_item};
pub use items::{menu_rows, select_menu_items, MenuRow, ADMIN_MENU_ITEMS, USER_MENU_ITEMS};
pub use styles::MenuStyles;
