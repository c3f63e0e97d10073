use super::*;

fn perms(pages: &[&str]) -> PermissionSet {
    pages.iter().copied().collect()
}

fn page_names(routes: &[RouteDescriptor]) -> Vec<&str> {
    routes.iter().map(|r| r.page_name.as_str()).collect()
}

fn rendered(resolution: Resolution) -> (PageView, RouteParams) {
    match resolution {
        Resolution::Render { view, params, .. } => (view, params),
        Resolution::Loading => panic!("expected a rendered page, got Loading"),
    }
}

#[test]
fn fallback_survives_every_filter() {
    let cases = [
        None,
        Some(perms(&[])),
        Some(perms(&["Users"])),
        Some(perms(&["Dashboard", "Analytics", "Users", "Task", "Reports", "Settings"])),
        Some(perms(&["Nonexistent"])),
        Some(perms(&[NOT_FOUND_PAGE, "Dashboard"])),
        Some(perms(&["Dashboard", NOT_FOUND_PAGE])),
    ];
    for permissions in cases.iter() {
        let table = route_table(permissions.as_ref());
        let resolved = filter_routes(&table, permissions.as_ref());
        let fallbacks = resolved
            .iter()
            .filter(|r| r.page_name == NOT_FOUND_PAGE)
            .count();
        assert_eq!(fallbacks, 1, "permissions: {permissions:?}");
        assert_eq!(resolved.iter().filter(|r| r.is_fallback()).count(), 1);
        assert_eq!(resolved.last().map(|r| r.view), Some(PageView::NotFound));
    }
}

#[test]
fn missing_or_empty_permissions_keep_only_fallback() {
    for permissions in [None, Some(perms(&[]))] {
        let table = route_table(permissions.as_ref());
        let resolved = filter_routes(&table, permissions.as_ref());
        assert_eq!(page_names(&resolved), vec![NOT_FOUND_PAGE]);
    }
}

#[test]
fn filter_preserves_table_order() {
    let permissions = perms(&["Settings", "Users"]);
    let table = route_table(Some(&permissions));
    let resolved = filter_routes(&table, Some(&permissions));

    let paths: Vec<&str> = resolved.iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/",
            "users/",
            "users/details/:id",
            "settings",
            "settings/roles",
            "settings/audit",
            "*",
        ]
    );
    // the root route carries the name of the home page
    assert_eq!(resolved[0].page_name, "Settings");
}

#[test]
fn fallback_name_as_home_page_leaves_root_unassigned() {
    let permissions = perms(&[NOT_FOUND_PAGE, "Dashboard"]);
    let table = route_table(Some(&permissions));
    assert_eq!(table[0].page_name, "");
    assert_eq!(table[0].view, PageView::NoAccess);

    let resolved = filter_routes(&table, Some(&permissions));
    let paths: Vec<&str> = resolved.iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["dashboard", "*"]);
}

#[test]
fn filter_does_not_touch_input() {
    let permissions = perms(&["Task"]);
    let table = route_table(Some(&permissions));
    let before = table.clone();
    let _ = filter_routes(&table, Some(&permissions));
    assert_eq!(table, before);
}

#[test]
fn root_view_without_pages_is_no_access() {
    assert_eq!(root_page_view(perms(&[]).first()), PageView::NoAccess);
    assert_eq!(root_page_view(None), PageView::NoAccess);
}

#[test]
fn root_view_uses_first_page() {
    assert_eq!(
        root_page_view(perms(&["Users", "Task"]).first()),
        PageView::UserList
    );
    assert_eq!(
        root_page_view(perms(&["Task", "Users"]).first()),
        PageView::Task
    );
}

#[test]
fn root_view_for_unmapped_page_is_no_access() {
    // Analytics has a route but no root mapping
    assert_eq!(root_page_view(Some("Analytics")), PageView::NoAccess);
    assert_eq!(root_page_view(Some("")), PageView::NoAccess);
}

#[test]
fn active_page_uses_only_first_segment() {
    let permissions = perms(&["Dashboard", "Settings"]);
    let table = route_table(Some(&permissions));
    // resolves through `settings`, never through `settings/roles`
    assert_eq!(
        find_matching_page("/panel/settings/roles", &table),
        Some("Settings")
    );
    assert_eq!(
        find_matching_page("/panel/users/details/7", &table),
        Some("Users")
    );
}

#[test]
fn active_page_unknown_segment_is_none() {
    let table = route_table(Some(&perms(&["Dashboard"])));
    assert_eq!(find_matching_page("/panel/unknown-x", &table), None);
    assert_eq!(find_matching_page("/panel", &table), None);
    assert_eq!(find_matching_page("", &table), None);
    assert_eq!(find_matching_page("/elsewhere/dashboard", &table), None);
}

#[test]
fn active_page_ignores_permissions() {
    // the resolver runs on the full table, not the filtered one
    let table = route_table(Some(&perms(&["Dashboard"])));
    assert_eq!(find_matching_page("/panel/reports", &table), Some("Reports"));
}

#[test]
fn active_page_for_panel_root() {
    let table = route_table(Some(&perms(&["Task"])));
    assert_eq!(find_matching_page("/panel/", &table), Some("Task"));

    // root without a home page has no name to report
    let table = route_table(None);
    assert_eq!(find_matching_page("/panel/", &table), None);
}

#[test]
fn match_route_captures_params() {
    let permissions = perms(&["Users"]);
    let routes = filter_routes(&route_table(Some(&permissions)), Some(&permissions));

    let (route, params) = match_route(&routes, "/users/details/42").expect("fallback exists");
    assert_eq!(route.view, PageView::UserDetails);
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.get("other"), None);

    let (route, _) = match_route(&routes, "/users").expect("fallback exists");
    assert_eq!(route.view, PageView::UserList);
}

#[test]
fn match_route_static_segments_ignore_case() {
    let permissions = perms(&["Settings"]);
    let routes = filter_routes(&route_table(Some(&permissions)), Some(&permissions));
    let (route, _) = match_route(&routes, "/Settings/AUDIT").expect("fallback exists");
    assert_eq!(route.view, PageView::Audit);
}

#[test]
fn fallback_has_lowest_priority() {
    let mut routes = route_table(Some(&perms(&["Task"])));
    // move the fallback to the front; it must still lose against a real match
    let fallback = routes.pop().expect("table is not empty");
    routes.insert(0, fallback);

    let (route, _) = match_route(&routes, "/task").expect("fallback exists");
    assert_eq!(route.view, PageView::Task);
    let (route, _) = match_route(&routes, "/task/extra").expect("fallback exists");
    assert_eq!(route.view, PageView::NotFound);
}

#[test]
fn resolve_without_permissions_is_loading() {
    assert_eq!(resolve("/dashboard", None), Resolution::Loading);
    assert_eq!(resolve("", None), Resolution::Loading);
}

#[test]
fn resolve_root_without_pages_is_no_access() {
    let (view, _) = rendered(resolve("/", Some(&perms(&[]))));
    assert_eq!(view, PageView::NoAccess);
    let (view, _) = rendered(resolve("/dashboard", Some(&perms(&[]))));
    assert_eq!(view, PageView::NotFound);
}

#[test]
fn resolve_root_renders_home_page() {
    let (view, _) = rendered(resolve("", Some(&perms(&["Reports", "Dashboard"]))));
    assert_eq!(view, PageView::Reports);
}

#[test]
fn resolve_forbidden_page_is_not_found() {
    let permissions = perms(&["Dashboard"]);
    let (view, _) = rendered(resolve("/users/details/42", Some(&permissions)));
    assert_eq!(view, PageView::NotFound);

    let permissions = perms(&["Users"]);
    let (view, params) = rendered(resolve("/users/details/42", Some(&permissions)));
    assert_eq!(view, PageView::UserDetails);
    assert_eq!(params.get("id"), Some("42"));
}

#[test]
fn resolve_named_pages() {
    let permissions = perms(&["Analytics"]);
    match resolve("/analytics", Some(&permissions)) {
        Resolution::Render {
            view, page_name, ..
        } => {
            assert_eq!(view, PageView::Maintenance);
            assert_eq!(page_name, "Analytics");
        }
        Resolution::Loading => panic!("permissions are loaded"),
    }
}

#[test]
fn panel_relative_strips_prefix() {
    assert_eq!(panel_relative("/panel"), "");
    assert_eq!(panel_relative("/panel/"), "/");
    assert_eq!(panel_relative("/panel/users/details/1"), "/users/details/1");
    assert_eq!(panel_relative("/panelists"), "/panelists");
    assert_eq!(panel_relative("/other"), "/other");
}

fn trail(path: &str, permissions: &PermissionSet) -> Vec<Breadcrumb> {
    match resolve(path, Some(permissions)) {
        Resolution::Render {
            view,
            page_name,
            params,
        } => view.breadcrumbs(&page_name, &params),
        Resolution::Loading => panic!("expected a rendered page, got Loading"),
    }
}

#[test]
fn maintenance_page_sets_its_breadcrumb() {
    let permissions = perms(&["Analytics"]);
    assert_eq!(
        trail("analytics", &permissions),
        vec![Breadcrumb::new("Analytics")]
    );
    // the root renders the home page under its own name
    assert_eq!(
        trail("", &perms(&["Reports", "Analytics"])),
        vec![Breadcrumb::new("Reports")]
    );
}

#[test]
fn nested_pages_link_back_to_their_parent() {
    let permissions = perms(&["Users", "Settings"]);
    assert_eq!(
        trail("users/details/7", &permissions),
        vec![
            Breadcrumb::linked("Users", "/panel/users"),
            Breadcrumb::new("User 7"),
        ]
    );
    assert_eq!(
        trail("settings/audit", &permissions),
        vec![
            Breadcrumb::linked("Settings", "/panel/settings"),
            Breadcrumb::new("Audit"),
        ]
    );
}

#[test]
fn every_permitted_page_has_a_breadcrumb() {
    let permissions = perms(&["Dashboard", "Analytics", "Users", "Task", "Reports", "Settings"]);
    for route in route_table(Some(&permissions)) {
        if route.is_fallback() {
            continue;
        }
        let path = route.path.replace(":id", "1");
        let crumbs = trail(&path, &permissions);
        assert!(!crumbs.is_empty(), "no breadcrumb for {path}");
        assert!(crumbs.iter().all(|c| !c.label.is_empty()), "empty label for {path}");
    }
}

#[test]
fn error_pages_clear_the_breadcrumbs() {
    assert!(trail("nowhere", &perms(&["Dashboard"])).is_empty());
    assert!(trail("", &perms(&[])).is_empty());
}
