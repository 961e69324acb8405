use footer_core::links::{ATTRIBUTION_NAME, ATTRIBUTION_URL, THEME_CREDIT_NAME, THEME_CREDIT_URL};
use footer_core::{
    card_class, container_class, public_security_href, public_security_link,
    record_authority_link, record_visible, right_inset, FooterConfig, Viewport,
};
use leptos::prelude::*;

use super::card::Card;
use crate::hooks::{use_is_mobile, use_uptime_text};

const LINK_CLASS: &str = "text-blue-500 hover:text-blue-600 transition-colors";

#[component]
fn ExternalLink(#[prop(into)] href: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <a href=move || href.get() target="_blank" rel="noopener noreferrer" class=LINK_CLASS>
            {children()}
        </a>
    }
}

/// Dashboard footer: attribution, record numbers and site uptime
#[component]
pub fn Footer(
    #[prop(into)] config: Signal<FooterConfig>,
    /// Settings side panel is open; reserves its width on desktop
    #[prop(into)]
    settings_open: Signal<bool>,
) -> impl IntoView {
    let is_mobile = use_is_mobile();
    let uptime = use_uptime_text(config);

    let style = Memo::new(move |_| config.with(|c| c.footer_style));
    let labels = Memo::new(move |_| config.with(|c| c.labels.clone()));

    let icp_number = Memo::new(move |_| config.with(|c| c.icp_record_number.clone()));
    let icp_enabled = Memo::new(move |_| config.with(|c| c.enable_icp_record));
    let icp_source = Memo::new(move |_| config.with(|c| c.icp_record_link.clone()));
    let icp_link = Memo::new(move |_| icp_source.with(|link| record_authority_link(link)));

    let psb_number =
        Memo::new(move |_| config.with(|c| c.public_security_record_number.clone()));
    let psb_enabled = Memo::new(move |_| config.with(|c| c.enable_public_security_record));
    let psb_source = Memo::new(move |_| config.with(|c| c.public_security_record_link.clone()));
    let psb_link = Memo::new(move |_| {
        psb_source.with(|link| psb_number.with(|number| public_security_link(link, number)))
    });
    let psb_href = Signal::derive(move || psb_link.with(|link| public_security_href(link)));

    let right = move || {
        let viewport = if is_mobile.get() {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        };
        right_inset(settings_open.get(), viewport)
    };

    view! {
        <footer class=move || container_class(style.get()) style:right=right>
            <Card class=Signal::derive(move || card_class(style.get()))>
                <p class="flex flex-wrap gap-1 justify-center text-sm text-secondary-foreground theme-text-shadow">
                    {move || labels.with(|l| l.powered_by.clone())}
                    " "
                    <ExternalLink href=ATTRIBUTION_URL>{ATTRIBUTION_NAME}</ExternalLink>
                    " | "
                    {move || labels.with(|l| l.theme_by.clone())}
                    " "
                    <ExternalLink href=THEME_CREDIT_URL>{THEME_CREDIT_NAME}</ExternalLink>
                    <Show when=move || icp_number.with(|n| record_visible(icp_enabled.get(), n))>
                        " | "
                        <ExternalLink href=icp_link>{move || icp_number.get()}</ExternalLink>
                    </Show>
                    <Show when=move || psb_number.with(|n| record_visible(psb_enabled.get(), n))>
                        " | "
                        <ExternalLink href=psb_href>{move || psb_number.get()}</ExternalLink>
                    </Show>
                    <Show when=move || uptime.with(|t| !t.is_empty())>
                        " | "
                        {move || uptime.get()}
                    </Show>
                </p>
            </Card>
        </footer>
    }
}
