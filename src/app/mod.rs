use leptos::{ev::keydown, prelude::*};
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{ParentRoute, Redirect, Route, Router, Routes},
    path, StaticSegment,
};
use leptos_use::{use_document, use_event_listener};
use panel_shared::{urls::PANEL_BASE_URL, ShowHelp};

use auth::{get_session, use_auth, AuthStore};
use breadcrumb::BreadcrumbState;

pub mod auth;
pub mod breadcrumb;
mod panel;
mod shared;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
fn Header() -> impl IntoView {
    let header_help_button_classes = "p-2 pl-4 pr-4 text-slate-50 hover:bg-slate-500 bg-slate-600 rounded-2xl font-bold m-2 text-center shadow-md shadow-orange-400/70";

    let help_active = use_context::<RwSignal<ShowHelp>>().expect("App provides show-help context");
    let auth = use_auth();
    let user_name = move || {
        auth.user
            .read()
            .as_ref()
            .map(|user| user.shown_name().to_string())
    };
    let role_name = move || {
        auth.combined_role
            .read()
            .as_ref()
            .map(|role| role.name.clone())
    };

    view! {
        <header class="flex flex-row justify-between items-center bg-black border-b-4 border-slate-600">
            <a href=PANEL_BASE_URL class="p-2 pl-4 text-2xl font-bold">
                "Panel"
            </a>
            <div class="flex flex-row items-center">
                <span class="m-2">{user_name}</span>
                <span class="m-2 text-slate-400">{role_name}</span>
                <span
                    on:click=move |_| { help_active.update(|a| a.toggle()) }
                    class=header_help_button_classes
                >
                    Help:
                    <span class="ml-2 text-orange-400">ctrl+alt+h</span>
                </span>
            </div>
        </header>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let help_active = RwSignal::new(ShowHelp::new(false));
    // event listener to intercept keycommands for the help menu
    let _cleanup = use_event_listener(use_document(), keydown, move |evt| {
        // <ctrl>-<alt>-H - Help
        if evt.alt_key() && evt.ctrl_key() && evt.key_code() == 72 {
            // toggle on/off help overlay
            help_active.update(|a| a.toggle())
        // <esc> - close Help if it is open
        } else if evt.key_code() == 27 {
            // turn off the overlay if it is currently on
            help_active.update(|a| a.set_off())
        }
    });
    provide_context(help_active);

    // the store stays empty until the session arrives; the panel shows a loader meanwhile
    let auth = AuthStore::new();
    provide_context(auth);
    let session = Resource::new(|| (), |_| get_session());
    Effect::new(move |_| match session.get() {
        Some(Ok(session)) => {
            auth.set_user(Some(session.user));
            auth.set_combined_role(Some(session.combined_role));
            auth.loaded.set(true);
        }
        Some(Err(e)) => {
            leptos::logging::warn!("Unable to load the session: {e}");
            auth.set_user(None);
            auth.set_combined_role(None);
            auth.loaded.set(true);
        }
        None => {}
    });

    provide_context(BreadcrumbState::new());

    // set by the main body whenever the location maps to a page
    let (current_page, set_current_page) = signal(String::new());

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/panel.css" />

        // sets the document title
        <Title text="panel - administration" />

        <div class="h-screen w-screen flex flex-col bg-slate-900 text-white">
            <Router>
                <Header />
                <div class="h-0 grow w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path=PANEL_BASE_URL /> }
                        />
                        <ParentRoute
                            path=path!("panel")
                            view=move || view! { <panel::PanelLayout current_page /> }
                        >
                            <Route
                                path=path!("")
                                view=move || {
                                    view! {
                                        <panel::MainBody
                                            curr_content=current_page
                                            set_page=set_current_page
                                        />
                                    }
                                }
                            />
                            <Route
                                path=path!("*any")
                                view=move || {
                                    view! {
                                        <panel::MainBody
                                            curr_content=current_page
                                            set_page=set_current_page
                                        />
                                    }
                                }
                            />
                        </ParentRoute>
                    </Routes>
                </div>
            </Router>
        </div>
    }
}
