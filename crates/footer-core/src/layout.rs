//! Footer container positioning

use crate::config::FooterStyle;
use serde::Serialize;

/// Inset reserved for the settings side panel (a CSS custom property)
pub const SETTINGS_PANEL_WIDTH: &str = "var(--setting-width)";

/// Viewports narrower than this are treated as mobile
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

const CONTAINER_BASE_CLASS: &str = "bottom-0 left-0 right-0 flex z-10";
const FOLLOW_CONTENT_CLASS: &str = "mb-4 w-(--main-width) max-w-screen-2xl mx-auto";
const CARD_BASE_CLASS: &str =
    "p-2 w-full flex items-center justify-center inset-shadow-sm inset-shadow-(color:--accent-a4)";

/// Viewport classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Mobile,
    #[default]
    Desktop,
}

impl Viewport {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Viewport::Mobile)
    }
}

/// Join non-empty class fragments with single spaces
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classes for the outer `<footer>` element
pub fn container_class(style: FooterStyle) -> String {
    let positioning = match style {
        FooterStyle::Levitation => "fixed",
        FooterStyle::FollowContent => FOLLOW_CONTENT_CLASS,
        FooterStyle::Default => "",
    };
    class_names([positioning, CONTAINER_BASE_CLASS])
}

/// Classes for the inner card; only the follow-content style keeps rounded corners
pub fn card_class(style: FooterStyle) -> String {
    let corners = if style == FooterStyle::FollowContent {
        ""
    } else {
        "rounded-none"
    };
    class_names([corners, CARD_BASE_CLASS])
}

/// CSS `right` value for the container
pub fn right_inset(settings_open: bool, viewport: Viewport) -> &'static str {
    if settings_open && !viewport.is_mobile() {
        SETTINGS_PANEL_WIDTH
    } else {
        "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_inset_desktop_open() {
        assert_eq!(right_inset(true, Viewport::Desktop), SETTINGS_PANEL_WIDTH);
    }

    #[test]
    fn test_right_inset_mobile_ignores_settings() {
        assert_eq!(right_inset(true, Viewport::Mobile), "0");
    }

    #[test]
    fn test_right_inset_closed() {
        assert_eq!(right_inset(false, Viewport::Desktop), "0");
        assert_eq!(right_inset(false, Viewport::Mobile), "0");
    }

    #[test]
    fn test_viewport_breakpoint() {
        assert_eq!(Viewport::from_width(767.9), Viewport::Mobile);
        assert_eq!(Viewport::from_width(768.0), Viewport::Desktop);
        assert_eq!(Viewport::from_width(1920.0), Viewport::Desktop);
    }

    #[test]
    fn test_container_class_per_style() {
        assert_eq!(
            container_class(FooterStyle::Levitation),
            "fixed bottom-0 left-0 right-0 flex z-10"
        );
        assert_eq!(
            container_class(FooterStyle::FollowContent),
            "mb-4 w-(--main-width) max-w-screen-2xl mx-auto bottom-0 left-0 right-0 flex z-10"
        );
        assert_eq!(
            container_class(FooterStyle::Default),
            "bottom-0 left-0 right-0 flex z-10"
        );
    }

    #[test]
    fn test_card_corners() {
        assert!(card_class(FooterStyle::Levitation).starts_with("rounded-none "));
        assert!(card_class(FooterStyle::Default).starts_with("rounded-none "));
        assert!(!card_class(FooterStyle::FollowContent).contains("rounded-none"));
    }

    #[test]
    fn test_class_names_skips_blanks() {
        assert_eq!(class_names(["", " a ", "  ", "b"]), "a b");
    }
}
