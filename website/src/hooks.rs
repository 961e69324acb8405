//! Reactive helpers for the footer

use chrono::Utc;
use footer_core::{FooterConfig, UptimeClock, Viewport, UPTIME_REFRESH_INTERVAL};
use leptos::ev;
use leptos::prelude::*;

/// Viewport classification of the current window
pub fn current_viewport() -> Viewport {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(Viewport::from_width)
        .unwrap_or_default()
}

/// Tracks whether the window is narrower than the mobile breakpoint
pub fn use_is_mobile() -> Signal<bool> {
    let (is_mobile, set_is_mobile) = signal(current_viewport().is_mobile());

    let handle = window_event_listener(ev::resize, move |_| {
        let mobile = current_viewport().is_mobile();
        if is_mobile.get_untracked() != mobile {
            set_is_mobile.set(mobile);
        }
    });
    on_cleanup(move || handle.remove());

    is_mobile.into()
}

/// Uptime text for `config`, refreshed every minute while the feature is on.
///
/// The interval is cleared whenever the clock changes (start time, template
/// or enable flag) and when the owning component unmounts.
pub fn use_uptime_text(config: Signal<FooterConfig>) -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());
    let clock = Memo::new(move |_| config.with(UptimeClock::from_config));

    Effect::new(move |_| {
        let Some(clock) = clock.get() else {
            set_text.set(String::new());
            return;
        };

        set_text.set(clock.text_at(Utc::now()));

        let refresh = move || set_text.set(clock.text_at(Utc::now()));
        match set_interval_with_handle(refresh, UPTIME_REFRESH_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("Uptime refresh timer unavailable: {e:?}"),
        }
    });

    text
}
