//! The main body of the panel: decides which page the current role gets to see

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use panel_shared::{
    routes::{find_matching_page, panel_relative, resolve, route_table, PageView, Resolution, RouteParams},
    ShowHelp,
};

use super::pages;
use crate::app::auth::use_auth;
use crate::app::breadcrumb::set_breadcrumbs_on_mount;
use crate::app::shared::{CenterWrapper, Loader};

fn page_view(
    page: PageView,
    page_name: &str,
    params: &RouteParams,
    curr_content: Signal<String>,
) -> AnyView {
    set_breadcrumbs_on_mount(page.breadcrumbs(page_name, params));
    match page {
        PageView::Dashboard => view! { <pages::Dashboard /> }.into_any(),
        PageView::Maintenance => view! { <pages::Maintenance curr_content /> }.into_any(),
        PageView::UserList => view! { <pages::UserList /> }.into_any(),
        PageView::UserDetails => {
            let id = params.get("id").unwrap_or_default().to_string();
            view! { <pages::UserDetails id /> }.into_any()
        }
        PageView::Task => view! { <pages::Task /> }.into_any(),
        PageView::Reports => view! { <pages::Reports /> }.into_any(),
        PageView::Settings => view! { <pages::Settings /> }.into_any(),
        PageView::Roles => view! { <pages::Roles /> }.into_any(),
        PageView::Audit => view! { <pages::Audit /> }.into_any(),
        PageView::NotFound => view! { <pages::NotFound /> }.into_any(),
        PageView::NoAccess => view! { <pages::NoAccess /> }.into_any(),
    }
}

#[component]
pub fn MainBody(
    /// name of the page the location currently maps to
    #[prop(into)]
    curr_content: Signal<String>,
    set_page: WriteSignal<String>,
) -> impl IntoView {
    let location = use_location();
    let auth = use_auth();
    let show_help = use_context::<RwSignal<ShowHelp>>().expect("App provides ShowHelp");

    // keep the active page in sync with the location; unknown locations leave it alone
    Effect::new(move |_| {
        let pathname = location.pathname.get();
        let routes = route_table(auth.page_access().as_ref());
        if let Some(page_name) = find_matching_page(&pathname, &routes) {
            set_page.set(page_name.to_string());
        }
    });

    let resolution = Memo::new(move |_| {
        let pathname = location.pathname.get();
        resolve(panel_relative(&pathname), auth.page_access().as_ref())
    });

    let body = move || match resolution.get() {
        Resolution::Loading => view! {
            <CenterWrapper>
                <Loader />
            </CenterWrapper>
        }
        .into_any(),
        Resolution::Render {
            view,
            page_name,
            params,
        } => page_view(view, &page_name, &params, curr_content),
    };

    view! {
        <div class="h-0 grow w-full overflow-y-auto">
            <main
                id="main-content"
                class="relative w-full h-full p-4 flex justify-center items-start"
            >
                {body}
                <div
                    class="bg-slate-500/50 rounded-lg backdrop-blur-xs absolute inset-0 w-full h-80 text-center"
                    class=(["hidden"], move || !show_help.read().get())
                >
                    <p class="mt-24">"The sidebar only lists the pages your role grants access to."</p>
                    <p>"Pages outside your role show up as not found."</p>
                    <p>
                        "Press"<span class="ml-2 text-orange-400">"esc"</span>" to close this overlay."
                    </p>
                </div>
            </main>
        </div>
    }
}
