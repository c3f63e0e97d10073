//! Types and functions shared by App and Server

pub mod nav;
pub mod roles;
pub mod routes;
pub mod urls;

use serde::{Deserialize, Serialize};

use roles::CombinedRole;

/// The signed-in user as the panel sees it
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct User {
    pub username: String,
    /// Shown in the header instead of the username if set
    pub display_name: Option<String>,
}
impl User {
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Everything the client needs to know about the current principal
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Session {
    pub user: User,
    pub combined_role: CombinedRole,
}

/// One entry in the breadcrumb trail above the main body
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Breadcrumb {
    pub label: String,
    /// entries without a link are rendered as plain text (usually the last one)
    pub href: Option<String>,
}
impl Breadcrumb {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }

    pub fn linked(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }
}

/// This provides context through the entire app. When ShowHelp(true) is present, some components
/// show a help-text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowHelp(bool);
impl ShowHelp {
    pub fn new(active: bool) -> Self {
        Self(active)
    }
    pub fn toggle(&mut self) {
        self.0 ^= true
    }
    pub fn set_off(&mut self) {
        self.0 = false
    }
    pub fn get(&self) -> bool {
        self.0
    }
}
impl From<ShowHelp> for bool {
    fn from(value: ShowHelp) -> Self {
        value.0
    }
}
