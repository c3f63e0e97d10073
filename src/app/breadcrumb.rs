//! The breadcrumb trail shown above the main body

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;
use panel_shared::Breadcrumb;

/// Holds the current trail; pages replace it when they are mounted
#[derive(Debug, Clone, Copy)]
pub struct BreadcrumbState(RwSignal<Vec<Breadcrumb>>);
impl BreadcrumbState {
    pub fn new() -> Self {
        Self(RwSignal::new(Vec::new()))
    }
}
impl Default for BreadcrumbState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_breadcrumb() -> WriteSignal<Vec<Breadcrumb>> {
    use_context::<BreadcrumbState>()
        .expect("App provides breadcrumb state")
        .0
        .write_only()
}

/// Replace the trail with `trail` once the calling component is mounted
pub fn set_breadcrumbs_on_mount(trail: Vec<Breadcrumb>) {
    let set_breadcrumbs = use_breadcrumb();
    Effect::new(move |_| set_breadcrumbs.set(trail.clone()));
}

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let trail = use_context::<BreadcrumbState>()
        .expect("App provides breadcrumb state")
        .0;

    view! {
        <nav aria-label="breadcrumb" class="p-2 pl-4 text-slate-300">
            <ol class="flex flex-row">
                {move || {
                    trail
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, crumb)| {
                            view! {
                                <li class="flex flex-row">
                                    {(idx > 0).then(|| view! { <span class="mr-2 ml-2">"/"</span> })}
                                    {match crumb.href {
                                        Some(href) => {
                                            Either::Left(
                                                view! {
                                                    <A href=href>
                                                        <span class="hover:text-sky-300">{crumb.label}</span>
                                                    </A>
                                                },
                                            )
                                        }
                                        None => {
                                            Either::Right(
                                                view! { <span class="text-slate-50">{crumb.label}</span> },
                                            )
                                        }
                                    }}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
