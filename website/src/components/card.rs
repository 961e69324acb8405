use footer_core::class_names;
use leptos::prelude::*;

const SURFACE_CLASS: &str = "rounded-lg border border-slate-800 bg-slate-900/80 backdrop-blur";

/// Plain surface; `class` is appended after the surface classes
#[component]
pub fn Card(children: Children, #[prop(into)] class: Signal<String>) -> impl IntoView {
    view! {
        <div class=move || class.with(|extra| class_names([SURFACE_CLASS, extra.as_str()]))>
            {children()}
        </div>
    }
}
