//! Access-filtered route resolution for the panel
//!
//! The route table is rebuilt from static definitions on every resolution. Only the root route
//! is dynamic: it renders whatever page comes first in the principal's permissions.
//!
//! All paths in the table are relative to [`PANEL_BASE_URL`].

use serde::{Deserialize, Serialize};

use crate::roles::PermissionSet;
use crate::urls::PANEL_BASE_URL;
use crate::Breadcrumb;

#[cfg(test)]
mod test;

/// Page name of the fallback route. It survives every permission filter.
pub const NOT_FOUND_PAGE: &str = "Not Found";

/// The renderable units the panel knows about
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Copy, Clone)]
pub enum PageView {
    Dashboard,
    /// stand-in for pages that are not built yet; shows the current page name
    Maintenance,
    UserList,
    UserDetails,
    Task,
    Reports,
    Settings,
    Roles,
    Audit,
    NotFound,
    NoAccess,
}
impl PageView {
    /// The breadcrumb trail shown while this view renders the page `page_name`
    pub fn breadcrumbs(self, page_name: &str, params: &RouteParams) -> Vec<Breadcrumb> {
        match self {
            Self::NotFound | Self::NoAccess => Vec::new(),
            Self::UserDetails => vec![
                Breadcrumb::linked("Users", format!("{PANEL_BASE_URL}/users")),
                Breadcrumb::new(format!("User {}", params.get("id").unwrap_or_default())),
            ],
            Self::Roles => vec![
                Breadcrumb::linked("Settings", format!("{PANEL_BASE_URL}/settings")),
                Breadcrumb::new("Roles"),
            ],
            Self::Audit => vec![
                Breadcrumb::linked("Settings", format!("{PANEL_BASE_URL}/settings")),
                Breadcrumb::new("Audit"),
            ],
            Self::Dashboard
            | Self::Maintenance
            | Self::UserList
            | Self::Task
            | Self::Reports
            | Self::Settings => vec![Breadcrumb::new(page_name)],
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RouteDescriptor {
    /// pattern relative to the panel root, e.g. `users/details/:id`
    pub path: &'static str,
    /// the page name permissions are granted for; empty for an unassigned root route
    pub page_name: String,
    pub view: PageView,
}
impl RouteDescriptor {
    fn new(path: &'static str, page_name: &str, view: PageView) -> Self {
        Self {
            path,
            page_name: page_name.to_string(),
            view,
        }
    }

    fn is_fallback(&self) -> bool {
        self.path == FALLBACK_PATH
    }
}

const ROOT_PATH: &str = "/";
const FALLBACK_PATH: &str = "*";

/// The view rendered at the panel root for a principal whose first permitted page is
/// `home_page`
///
/// Unknown page names render [`PageView::NoAccess`].
pub fn root_page_view(home_page: Option<&str>) -> PageView {
    match home_page {
        Some("Dashboard") => PageView::Dashboard,
        Some("Users") => PageView::UserList,
        Some("Task") => PageView::Task,
        Some("Reports") => PageView::Reports,
        Some("Settings") => PageView::Settings,
        _ => PageView::NoAccess,
    }
}

/// The full route table for a principal with the given permissions
///
/// The permissions only decide the root route here; use [`filter_routes`] to restrict the table.
pub fn route_table(permissions: Option<&PermissionSet>) -> Vec<RouteDescriptor> {
    // the fallback name never identifies a home page
    let home_page = permissions
        .and_then(PermissionSet::first)
        .filter(|page| *page != NOT_FOUND_PAGE);
    vec![
        RouteDescriptor::new(
            ROOT_PATH,
            home_page.unwrap_or_default(),
            root_page_view(home_page),
        ),
        RouteDescriptor::new("dashboard", "Dashboard", PageView::Dashboard),
        RouteDescriptor::new("analytics", "Analytics", PageView::Maintenance),
        RouteDescriptor::new("users/", "Users", PageView::UserList),
        RouteDescriptor::new("users/details/:id", "Users", PageView::UserDetails),
        RouteDescriptor::new("task", "Task", PageView::Task),
        RouteDescriptor::new("reports", "Reports", PageView::Reports),
        RouteDescriptor::new("settings", "Settings", PageView::Settings),
        RouteDescriptor::new("settings/roles", "Settings", PageView::Roles),
        RouteDescriptor::new("settings/audit", "Settings", PageView::Audit),
        RouteDescriptor::new(FALLBACK_PATH, NOT_FOUND_PAGE, PageView::NotFound),
    ]
}

/// Restrict `routes` to the ones the principal may view
///
/// The fallback route is always kept. Without permissions (role not loaded yet) nothing else
/// survives, which callers should treat as loading rather than as a denial.
pub fn filter_routes(
    routes: &[RouteDescriptor],
    permissions: Option<&PermissionSet>,
) -> Vec<RouteDescriptor> {
    routes
        .iter()
        .filter(|route| {
            route.is_fallback()
                || permissions.is_some_and(|p| p.contains(&route.page_name))
        })
        .cloned()
        .collect()
}

/// The page name for `current_path`, used to highlight the active page
///
/// Only the first segment after the panel prefix is compared against the first segment of each
/// route, so `/panel/settings/roles` resolves through the `settings` route. Dynamic segments
/// deeper in the path are never looked at.
pub fn find_matching_page<'a>(current_path: &str, routes: &'a [RouteDescriptor]) -> Option<&'a str> {
    let segment = current_path
        .strip_prefix(PANEL_BASE_URL)?
        .strip_prefix('/')?
        .split('/')
        .next()?;
    routes
        .iter()
        .find(|route| route.path.split('/').next() == Some(segment))
        .map(|route| route.page_name.as_str())
        .filter(|page_name| !page_name.is_empty())
}

/// Values captured from `:name` segments, in pattern order
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RouteParams(Vec<(String, String)>);
impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Match a path (relative to the panel root) against a single pattern
fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    if pattern == FALLBACK_PATH {
        return Some(RouteParams::default());
    }
    let pattern_segments: Vec<&str> = segments(pattern).collect();
    let path_segments: Vec<&str> = segments(path).collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = expected.strip_prefix(':') {
            params.push((name.to_string(), actual.to_string()));
        } else if !expected.eq_ignore_ascii_case(actual) {
            return None;
        }
    }
    Some(RouteParams(params))
}

/// The route in `routes` that serves `path`
///
/// Routes are tried in table order, the fallback only after everything else failed.
pub fn match_route<'a>(
    routes: &'a [RouteDescriptor],
    path: &str,
) -> Option<(&'a RouteDescriptor, RouteParams)> {
    let specific = routes.iter().filter(|r| !r.is_fallback());
    let fallback = routes.iter().filter(|r| r.is_fallback());
    specific
        .chain(fallback)
        .find_map(|route| match_pattern(route.path, path).map(|params| (route, params)))
}

/// Strips the panel prefix from an absolute location
///
/// Locations outside the panel are returned unchanged and end up on the fallback route.
pub fn panel_relative(location: &str) -> &str {
    match location.strip_prefix(PANEL_BASE_URL) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => location,
    }
}

/// What the main body should show
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Resolution {
    /// the permissions are not known yet
    Loading,
    Render {
        view: PageView,
        page_name: String,
        params: RouteParams,
    },
}

/// Resolve `path` (relative to the panel root) for a principal with `permissions`
pub fn resolve(path: &str, permissions: Option<&PermissionSet>) -> Resolution {
    let Some(permissions) = permissions else {
        return Resolution::Loading;
    };
    if permissions.is_empty() && segments(path).next().is_none() {
        return Resolution::Render {
            view: PageView::NoAccess,
            page_name: String::new(),
            params: RouteParams::default(),
        };
    }

    let routes = filter_routes(&route_table(Some(permissions)), Some(permissions));
    match match_route(&routes, path) {
        Some((route, params)) => Resolution::Render {
            view: route.view,
            page_name: route.page_name.clone(),
            params,
        },
        // filter_routes keeps the fallback, so this is unreachable for a well-formed table
        None => Resolution::Render {
            view: PageView::NotFound,
            page_name: NOT_FOUND_PAGE.to_string(),
            params: RouteParams::default(),
        },
    }
}
