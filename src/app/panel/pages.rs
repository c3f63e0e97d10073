//! The individual pages of the panel
//!
//! These show placeholder content for now. The breadcrumb trail is set by the main body.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::shared::CenterWrapper;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! { <div>"Dummy Dashboard"</div> }
}

/// Placeholder for pages that have a route but no content yet
#[component]
pub fn Maintenance(curr_content: Signal<String>) -> impl IntoView {
    view! { <h1 class="text-4xl font-semibold">{curr_content}</h1> }
}

#[component]
pub fn UserList() -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <h2 class="text-2xl font-semibold">"Users"</h2>
            <A href="/panel/users/details/1">"First user"</A>
        </div>
    }
}

#[component]
pub fn UserDetails(id: String) -> impl IntoView {
    view! { <div>"Details for user "{id}</div> }
}

#[component]
pub fn Task() -> impl IntoView {
    view! { <div>"Dummy Task"</div> }
}

#[component]
pub fn Reports() -> impl IntoView {
    view! { <div>"Dummy Reports"</div> }
}

#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="flex flex-col">
            <A href="/panel/settings/roles">"Roles"</A>
            <A href="/panel/settings/audit">"Audit log"</A>
        </div>
    }
}

#[component]
pub fn Roles() -> impl IntoView {
    view! { <div>"Dummy Roles"</div> }
}

#[component]
pub fn Audit() -> impl IntoView {
    view! { <div>"Dummy Audit"</div> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <CenterWrapper>"404 | Page not found"</CenterWrapper> }
}

#[component]
pub fn NoAccess() -> impl IntoView {
    view! { <h1 class="text-4xl font-semibold">"No Access"</h1> }
}
