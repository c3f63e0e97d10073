//! Everything below /panel: the sidebar, the breadcrumbs and the main body

use leptos::prelude::*;
use leptos_router::components::Outlet;
use panel_shared::nav::{visible_nav_items, NavItem};

use super::auth::{use_auth, RequireAuth};
use super::breadcrumb::Breadcrumbs;

mod main_body;
mod pages;

pub use main_body::MainBody;

const SIDEBAR_LINK_CLASSES: &str =
    "block p-2 pl-4 pr-4 hover:bg-slate-500 bg-slate-600 rounded-xl font-bold m-2 shadow-md";

#[component]
fn SidebarLink(item: NavItem, current_page: ReadSignal<String>) -> impl IntoView {
    view! {
        <a
            class=SIDEBAR_LINK_CLASSES
            class=(
                ["text-sky-300", "shadow-slate-300"],
                move || current_page.read().as_str() == item.page_name,
            )
            class=(
                ["text-slate-50", "shadow-sky-600"],
                move || current_page.read().as_str() != item.page_name,
            )
            href=item.href
        >
            {item.label}
        </a>
    }
}

/// Links to the top level pages the current role may open
#[component]
fn Sidebar(current_page: ReadSignal<String>) -> impl IntoView {
    let auth = use_auth();

    view! {
        <aside class="w-56 flex flex-col border-r-4 border-slate-600">
            <ul>
                {move || {
                    visible_nav_items(auth.page_access().as_ref())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <SidebarLink item current_page />
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}

#[component]
pub fn PanelLayout(current_page: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="h-full w-full flex flex-row">
            <Sidebar current_page />
            <div class="h-full w-0 grow flex flex-col">
                <Breadcrumbs />
                <RequireAuth>
                    <Outlet />
                </RequireAuth>
            </div>
        </div>
    }
}
