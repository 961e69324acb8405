//! Everything needed to draw the footer, in one value

use crate::config::FooterConfig;
use crate::layout::{card_class, container_class, right_inset, Viewport};
use crate::segments::{footer_segments, render_plain, FooterSegment};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub container_class: String,
    pub card_class: String,
    /// CSS `right` value
    pub right_inset: String,
    pub segments: Vec<FooterSegment>,
}

impl FooterView {
    pub fn build(
        config: &FooterConfig,
        settings_open: bool,
        viewport: Viewport,
        uptime_text: &str,
    ) -> Self {
        Self {
            container_class: container_class(config.footer_style),
            card_class: card_class(config.footer_style),
            right_inset: right_inset(settings_open, viewport).to_string(),
            segments: footer_segments(config, uptime_text),
        }
    }

    pub fn plain_text(&self) -> String {
        render_plain(&self.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FooterStyle;
    use crate::layout::SETTINGS_PANEL_WIDTH;

    #[test]
    fn test_build_levitation_with_settings_open() {
        let config = FooterConfig {
            footer_style: FooterStyle::Levitation,
            ..Default::default()
        };
        let view = FooterView::build(&config, true, Viewport::Desktop, "");

        assert!(view.container_class.starts_with("fixed "));
        assert_eq!(view.right_inset, SETTINGS_PANEL_WIDTH);
        assert_eq!(view.segments.len(), 2);
    }

    #[test]
    fn test_build_mobile() {
        let view = FooterView::build(&FooterConfig::default(), true, Viewport::Mobile, "up");
        assert_eq!(view.right_inset, "0");
        assert!(view.plain_text().ends_with(" | up"));
    }

    #[test]
    fn test_serializes_without_empty_fields() {
        let view = FooterView::build(&FooterConfig::default(), false, Viewport::Desktop, "up");
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["right_inset"], "0");
        assert_eq!(json["segments"][0]["kind"], "attribution");
        assert_eq!(json["segments"][2]["kind"], "uptime");
        assert!(json["segments"][2].get("href").is_none());
        assert!(json["segments"][2].get("prefix").is_none());
    }
}
