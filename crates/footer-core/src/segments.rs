//! Footer line segments
//!
//! The footer text is a fixed-order list of segments joined by
//! [`SEGMENT_SEPARATOR`]: attribution, theme credit, ICP record,
//! public-security record, uptime. The two attribution segments are always
//! present; the rest appear only when they have something to show.

use crate::config::FooterConfig;
use crate::links::{
    public_security_href, public_security_link, record_authority_link, ATTRIBUTION_NAME,
    ATTRIBUTION_URL, THEME_CREDIT_NAME, THEME_CREDIT_URL,
};
use serde::Serialize;

pub const SEGMENT_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Attribution,
    ThemeCredit,
    Icp,
    PublicSecurity,
    Uptime,
}

/// One piece of the footer line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterSegment {
    pub kind: SegmentKind,

    /// Label rendered before the text, separated by a space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    pub text: String,

    /// Anchor target; `None` renders plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl FooterSegment {
    fn link(
        kind: SegmentKind,
        prefix: Option<String>,
        text: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            prefix,
            text: text.into(),
            href: Some(href.into()),
        }
    }

    /// Plain-text rendering of this segment
    pub fn plain(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix} {}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Whether a compliance record segment is rendered.
///
/// The enable flag alone never shows an empty record.
#[allow(clippy::nonminimal_bool)]
pub fn record_visible(enabled: bool, number: &str) -> bool {
    (enabled || !number.is_empty()) && !number.is_empty()
}

/// Assemble the footer segments in render order
pub fn footer_segments(config: &FooterConfig, uptime_text: &str) -> Vec<FooterSegment> {
    let labels = &config.labels;
    let mut segments = vec![
        FooterSegment::link(
            SegmentKind::Attribution,
            Some(labels.powered_by.clone()),
            ATTRIBUTION_NAME,
            ATTRIBUTION_URL,
        ),
        FooterSegment::link(
            SegmentKind::ThemeCredit,
            Some(labels.theme_by.clone()),
            THEME_CREDIT_NAME,
            THEME_CREDIT_URL,
        ),
    ];

    if record_visible(config.enable_icp_record, &config.icp_record_number) {
        segments.push(FooterSegment::link(
            SegmentKind::Icp,
            None,
            &config.icp_record_number,
            record_authority_link(&config.icp_record_link),
        ));
    }

    if record_visible(
        config.enable_public_security_record,
        &config.public_security_record_number,
    ) {
        let derived = public_security_link(
            &config.public_security_record_link,
            &config.public_security_record_number,
        );
        segments.push(FooterSegment::link(
            SegmentKind::PublicSecurity,
            None,
            &config.public_security_record_number,
            public_security_href(&derived),
        ));
    }

    if !uptime_text.is_empty() {
        segments.push(FooterSegment {
            kind: SegmentKind::Uptime,
            prefix: None,
            text: uptime_text.to_string(),
            href: None,
        });
    }

    segments
}

/// The footer line as plain text
pub fn render_plain(segments: &[FooterSegment]) -> String {
    segments
        .iter()
        .map(FooterSegment::plain)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::{PUBLIC_SECURITY_PORTAL_URL, RECORD_AUTHORITY_URL};

    fn kinds(segments: &[FooterSegment]) -> Vec<SegmentKind> {
        segments.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_default_config_has_only_attribution() {
        let segments = footer_segments(&FooterConfig::default(), "");
        assert_eq!(
            kinds(&segments),
            vec![SegmentKind::Attribution, SegmentKind::ThemeCredit]
        );
    }

    #[test]
    fn test_icp_absent_when_blank_even_if_enabled() {
        let config = FooterConfig {
            enable_icp_record: true,
            icp_record_number: String::new(),
            icp_record_link: String::new(),
            ..Default::default()
        };
        let segments = footer_segments(&config, "");
        assert!(!kinds(&segments).contains(&SegmentKind::Icp));
    }

    #[test]
    fn test_icp_shown_with_number_even_if_disabled() {
        let config = FooterConfig {
            enable_icp_record: false,
            icp_record_number: "京ICP备12345678号".to_string(),
            ..Default::default()
        };
        let segments = footer_segments(&config, "");
        let icp = segments
            .iter()
            .find(|s| s.kind == SegmentKind::Icp)
            .unwrap();
        assert_eq!(icp.text, "京ICP备12345678号");
        assert_eq!(icp.href.as_deref(), Some(RECORD_AUTHORITY_URL));
    }

    #[test]
    fn test_public_security_without_digits_falls_back_to_portal() {
        let config = FooterConfig {
            public_security_record_number: "沪公网安备".to_string(),
            ..Default::default()
        };
        let segments = footer_segments(&config, "");
        let psb = segments.last().unwrap();
        assert_eq!(psb.kind, SegmentKind::PublicSecurity);
        assert_eq!(psb.href.as_deref(), Some(PUBLIC_SECURITY_PORTAL_URL));
    }

    #[test]
    fn test_full_order() {
        let config = FooterConfig {
            icp_record_number: "ICP-1".to_string(),
            public_security_record_number: "PSB-2".to_string(),
            ..Default::default()
        };
        let segments = footer_segments(&config, "up");
        assert_eq!(
            kinds(&segments),
            vec![
                SegmentKind::Attribution,
                SegmentKind::ThemeCredit,
                SegmentKind::Icp,
                SegmentKind::PublicSecurity,
                SegmentKind::Uptime,
            ]
        );
        assert_eq!(segments[4].href, None);
    }

    #[test]
    fn test_render_plain() {
        let config = FooterConfig {
            icp_record_number: "京ICP备12345678号".to_string(),
            public_security_record_number: "沪公网安备31010402000001号".to_string(),
            ..Default::default()
        };
        let segments = footer_segments(&config, "站点已运行 1 天 2 小时 3 分钟");

        insta::assert_snapshot!(
            render_plain(&segments),
            @"Powered by Komari Monitor | Theme by PurCarte | 京ICP备12345678号 | 沪公网安备31010402000001号 | 站点已运行 1 天 2 小时 3 分钟"
        );
    }

    #[test]
    fn test_record_visible() {
        assert!(!record_visible(true, ""));
        assert!(!record_visible(false, ""));
        assert!(record_visible(false, "x"));
        assert!(record_visible(true, "x"));
    }
}
