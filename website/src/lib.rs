pub mod components;
pub mod data;
pub mod hooks;

use components::footer::Footer;
use components::settings_panel::SettingsPanel;
use leptos::prelude::*;

/// Demo dashboard shell: a settings toggle, the settings panel and the footer
#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(data::demo_config());
    let (settings_open, set_settings_open) = signal(false);

    view! {
        <div
            class="min-h-screen flex flex-col bg-slate-950 text-slate-200 font-sans"
            style="--setting-width: 20rem; --main-width: calc(100% - 2rem)"
        >
            <main class="flex-1 max-w-7xl w-full mx-auto px-6 py-12">
                <h1 class="text-2xl font-bold text-white">"Dashboard"</h1>
                <button
                    on:click=move |_| set_settings_open.update(|v| *v = !*v)
                    class="mt-6 px-4 py-2 rounded-lg bg-slate-800 hover:bg-slate-700 transition-colors"
                >
                    {move || if settings_open.get() { "Close settings" } else { "Open settings" }}
                </button>
            </main>
            <SettingsPanel config=config open=settings_open />
            <Footer config=config settings_open=settings_open />
        </div>
    }
}
