//! # Menu Items
//!
//! The fixed navigation lists and role-based selection.

use crate::session::User;

/// A single navigation entry in the side menu.
///
/// `path` doubles as the render key and is unique within each list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Route path handed to the navigator.
    pub path: &'static str,
    /// Glyph shown before the label.
    pub icon: &'static str,
    /// Visible label.
    pub label: &'static str,
}

impl MenuItem {
    const fn new(path: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self { path, icon, label }
    }
}

/// Navigation for regular users.
pub const USER_MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::new("/user/", "🏠", "Home"),
    MenuItem::new("/user/profile", "👤", "Profile"),
    MenuItem::new("/user/wallet", "💰", "Wallet"),
    MenuItem::new("/user/redeem", "🎁", "Redemption"),
];

/// Navigation for administrators.
pub const ADMIN_MENU_ITEMS: [MenuItem; 6] = [
    MenuItem::new("/admin/", "👥", "Users"),
    MenuItem::new("/admin/redeemreq", "📋", "Redemption Requests"),
    MenuItem::new("/admin/manageAds", "➕", "Manage Ads"),
    MenuItem::new("/admin/manageOffers", "🛍️", "Manage Offers"),
    MenuItem::new("/admin/liveCoupons", "🎟️", "Manage Coupons"),
    MenuItem::new("/admin/profile", "👤", "Profile"),
];

/// Picks the navigation list for the current user.
///
/// Admins get [`ADMIN_MENU_ITEMS`]; everyone else, including a missing
/// user, gets [`USER_MENU_ITEMS`].
#[must_use]
pub fn select_menu_items(user: Option<&User>) -> &'static [MenuItem] {
    match user {
        Some(user) if user.is_admin() => &ADMIN_MENU_ITEMS,
        _ => &USER_MENU_ITEMS,
    }
}

/// One rendered row of the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow<'a> {
    /// An actionable navigation entry.
    Item(&'a MenuItem),
    /// A separator between two consecutive entries.
    Divider,
}

/// Interleaves dividers between consecutive items.
///
/// `n` items produce `n - 1` dividers, never leading or trailing.
#[must_use]
pub fn menu_rows(items: &[MenuItem]) -> Vec<MenuRow<'_>> {
    let mut rows = Vec::with_capacity(items.len().saturating_mul(2).saturating_sub(1));
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            rows.push(MenuRow::Divider);
        }
        rows.push(MenuRow::Item(item));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;
    use std::collections::HashSet;

    fn user_with_role(role: &str) -> User {
        User {
            username: Some("pup".to_string()),
            role: Role::from(role),
        }
    }

    fn paths(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.path).collect()
    }

    #[test]
    fn test_admin_gets_admin_items_in_order() {
        let admin = user_with_role("admin");
        let items = select_menu_items(Some(&admin));

        assert_eq!(
            paths(items),
            vec![
                "/admin/",
                "/admin/redeemreq",
                "/admin/manageAds",
                "/admin/manageOffers",
                "/admin/liveCoupons",
                "/admin/profile",
            ]
        );
    }

    #[test]
    fn test_regular_user_gets_user_items() {
        let user = user_with_role("user");
        let items = select_menu_items(Some(&user));

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].path, "/user/");
        assert_eq!(items[3].path, "/user/redeem");
        assert_eq!(items[3].label, "Redemption");
    }

    #[test]
    fn test_missing_user_falls_back_to_user_items() {
        assert_eq!(select_menu_items(None), &USER_MENU_ITEMS);
    }

    #[test]
    fn test_unknown_role_is_not_admin() {
        for role in ["Admin", "superuser", "", "ADMIN"] {
            let user = user_with_role(role);
            assert_eq!(select_menu_items(Some(&user)), &USER_MENU_ITEMS, "role {role:?}");
        }
    }

    #[test]
    fn test_paths_are_unique_per_list() {
        for list in [&USER_MENU_ITEMS[..], &ADMIN_MENU_ITEMS[..]] {
            let unique: HashSet<_> = list.iter().map(|item| item.path).collect();
            assert_eq!(unique.len(), list.len());
        }
    }

    #[test]
    fn test_rows_have_one_fewer_divider_than_items() {
        for list in [&USER_MENU_ITEMS[..], &ADMIN_MENU_ITEMS[..]] {
            let rows = menu_rows(list);
            let dividers = rows.iter().filter(|r| matches!(r, MenuRow::Divider)).count();

            assert_eq!(dividers, list.len() - 1);
            assert!(matches!(rows.first(), Some(MenuRow::Item(_))));
            assert!(matches!(rows.last(), Some(MenuRow::Item(_))));
        }
    }

    #[test]
    fn test_rows_alternate_items_and_dividers() {
        let rows = menu_rows(&USER_MENU_ITEMS);

        assert_eq!(
            rows,
            vec![
                MenuRow::Item(&USER_MENU_ITEMS[0]),
                MenuRow::Divider,
                MenuRow::Item(&USER_MENU_ITEMS[1]),
                MenuRow::Divider,
                MenuRow::Item(&USER_MENU_ITEMS[2]),
                MenuRow::Divider,
                MenuRow::Item(&USER_MENU_ITEMS[3]),
            ]
        );
    }

    #[test]
    fn test_rows_for_empty_and_single_lists() {
        assert!(menu_rows(&[]).is_empty());
        assert_eq!(
            menu_rows(&USER_MENU_ITEMS[..1]),
            vec![MenuRow::Item(&USER_MENU_ITEMS[0])]
        );
    }
}
