//! Small layout pieces used across the app

use leptos::prelude::*;

#[component]
pub fn CenterWrapper(children: Children) -> impl IntoView {
    view! { <div class="w-full h-full flex flex-col justify-center items-center">{children()}</div> }
}

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="animate-pulse text-slate-300" role="status">
            "Loading..."
        </div>
    }
}
