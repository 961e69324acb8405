use footer_core::FooterConfig;
use leptos::prelude::*;

use crate::data::next_style;

/// Side panel for the footer options the demo lets you change live
#[component]
pub fn SettingsPanel(config: RwSignal<FooterConfig>, #[prop(into)] open: Signal<bool>) -> impl IntoView {
    let style_label = move || config.with(|c| c.footer_style.to_string());
    let uptime_label = move || {
        if config.with(|c| c.enable_site_runtime) {
            "Uptime: on"
        } else {
            "Uptime: off"
        }
    };

    view! {
        <aside
            class="fixed top-0 right-0 h-full w-(--setting-width) bg-slate-900 border-l border-slate-800 p-6 space-y-4 z-20"
            class:hidden=move || !open.get()
        >
            <h2 class="text-lg font-semibold text-white">"Footer"</h2>
            <button
                on:click=move |_| config.update(|c| c.footer_style = next_style(c.footer_style))
                class="w-full px-4 py-2 rounded-lg bg-slate-800 hover:bg-slate-700 transition-colors"
            >
                "Style: " {style_label}
            </button>
            <button
                on:click=move |_| config.update(|c| c.enable_site_runtime = !c.enable_site_runtime)
                class="w-full px-4 py-2 rounded-lg bg-slate-800 hover:bg-slate-700 transition-colors"
            >
                {uptime_label}
            </button>
            <label class="block text-sm text-slate-400">
                "Site start time"
                <input
                    type="text"
                    class="mt-1 w-full px-3 py-2 rounded-lg bg-slate-950 border border-slate-800 text-slate-200"
                    prop:value=move || config.with(|c| c.site_start_time.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        config.update(|c| c.site_start_time = value);
                    }
                />
            </label>
        </aside>
    }
}
