//! Roles, the permissions they grant and the set of pages a principal may open

use serde::{Deserialize, Serialize};


/// Access to a single page, identified by its page name (e.g. "Users")
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Permission {
    pub page: String,
}
impl Permission {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}

/// A named role as it is configured on the server
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Role {
    pub name: String,
    pub permissions: Vec<Permission>,
}

/// The union of all roles a principal holds
///
/// Permissions keep the order in which they first appeared in the roles; the first one is the
/// home page of the principal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct CombinedRole {
    pub name: String,
    pub permissions: Vec<Permission>,
}
impl CombinedRole {
    pub fn combine<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Self {
        let mut names = Vec::new();
        let mut permissions: Vec<Permission> = Vec::new();
        for role in roles {
            names.push(role.name.as_str());
            for permission in &role.permissions {
                if !permissions.iter().any(|p| p.page == permission.page) {
                    permissions.push(permission.clone());
                }
            }
        }
        Self {
            name: names.join(" + "),
            permissions,
        }
    }

    /// The pages this role grants access to
    pub fn page_access(&self) -> PermissionSet {
        self.permissions.iter().map(|p| p.page.clone()).collect()
    }
}

/// Ordered set of page names a principal may view
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PermissionSet(Vec<String>);
impl PermissionSet {
    pub fn contains(&self, page_name: &str) -> bool {
        self.0.iter().any(|p| p == page_name)
    }

    /// the home page of the principal
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
impl FromIterator<String> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut pages: Vec<String> = Vec::new();
        for page in iter {
            if !pages.contains(&page) {
                pages.push(page);
            }
        }
        Self(pages)
    }
}
impl<'a> FromIterator<&'a str> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}
