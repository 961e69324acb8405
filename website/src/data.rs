use footer_core::{FooterConfig, FooterStyle};

/// Config the demo app starts with
pub fn demo_config() -> FooterConfig {
    FooterConfig {
        footer_style: FooterStyle::Levitation,
        enable_icp_record: true,
        icp_record_number: "京ICP备12345678号-1".to_string(),
        enable_public_security_record: true,
        public_security_record_number: "沪公网安备31010402000001号".to_string(),
        enable_site_runtime: true,
        site_start_time: "2024-01-01T00:00:00+08:00".to_string(),
        ..Default::default()
    }
}

/// Order the settings panel cycles through
pub const STYLE_CYCLE: [FooterStyle; 3] = [
    FooterStyle::Levitation,
    FooterStyle::FollowContent,
    FooterStyle::Default,
];

pub fn next_style(current: FooterStyle) -> FooterStyle {
    let index = STYLE_CYCLE
        .iter()
        .position(|style| *style == current)
        .unwrap_or(0);
    STYLE_CYCLE[(index + 1) % STYLE_CYCLE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_cycle_wraps() {
        assert_eq!(next_style(FooterStyle::Levitation), FooterStyle::FollowContent);
        assert_eq!(next_style(FooterStyle::FollowContent), FooterStyle::Default);
        assert_eq!(next_style(FooterStyle::Default), FooterStyle::Levitation);
    }

    #[test]
    fn test_demo_config_is_valid() {
        assert!(demo_config().label_warnings().is_empty());
    }
}
