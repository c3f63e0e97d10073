//! The top level entries of the panel sidebar

use crate::roles::PermissionSet;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavItem {
    /// the page name a permission has to grant for this entry to show up
    pub page_name: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        page_name: "Dashboard",
        label: "Dashboard",
        href: "/panel/dashboard",
    },
    NavItem {
        page_name: "Analytics",
        label: "Analytics",
        href: "/panel/analytics",
    },
    NavItem {
        page_name: "Users",
        label: "Users",
        href: "/panel/users",
    },
    NavItem {
        page_name: "Task",
        label: "Tasks",
        href: "/panel/task",
    },
    NavItem {
        page_name: "Reports",
        label: "Reports",
        href: "/panel/reports",
    },
    NavItem {
        page_name: "Settings",
        label: "Settings",
        href: "/panel/settings",
    },
];

/// The sidebar entries a principal with `permissions` gets to see
///
/// Nothing is shown while the permissions are still loading.
pub fn visible_nav_items(permissions: Option<&PermissionSet>) -> Vec<NavItem> {
    let Some(permissions) = permissions else {
        return Vec::new();
    };
    NAV_ITEMS
        .iter()
        .filter(|item| permissions.contains(item.page_name))
        .copied()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nothing_visible_while_loading() {
        assert!(visible_nav_items(None).is_empty());
    }

    #[test]
    fn visible_items_follow_sidebar_order() {
        let permissions: PermissionSet = ["Settings", "Dashboard", "Unknown"].into_iter().collect();
        let labels: Vec<&str> = visible_nav_items(Some(&permissions))
            .iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["Dashboard", "Settings"]);
    }

    #[test]
    fn nav_targets_resolve_to_their_page() {
        let permissions: PermissionSet = NAV_ITEMS.iter().map(|item| item.page_name).collect();
        let table = crate::routes::route_table(Some(&permissions));
        for item in NAV_ITEMS {
            assert_eq!(
                crate::routes::find_matching_page(item.href, &table),
                Some(item.page_name)
            );
        }
    }
}
