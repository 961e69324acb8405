//! Footer configuration snapshot
//!
//! The footer never owns its configuration: callers hand it a [`FooterConfig`]
//! read from wherever the dashboard keeps settings. For standalone use the
//! snapshot can be loaded from a TOML file, or from the theme's exported JSON
//! config (camelCase keys are accepted as aliases).

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Placeholder tokens understood by [`FooterLabels::uptime_template`]
pub const DAYS_PLACEHOLDER: &str = "{days}";
pub const HOURS_PLACEHOLDER: &str = "{hours}";
pub const MINUTES_PLACEHOLDER: &str = "{minutes}";

/// Positioning style of the footer container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum FooterStyle {
    /// Fixed to the bottom of the viewport
    #[serde(rename = "levitation", alias = "fixed")]
    Levitation,

    /// Sits below the content, centered with a max width
    #[serde(rename = "followContent", alias = "follow_content")]
    FollowContent,

    /// Edge-to-edge, in normal flow
    #[default]
    #[serde(other, rename = "default")]
    Default,
}

impl std::fmt::Display for FooterStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FooterStyle::Levitation => write!(f, "levitation"),
            FooterStyle::FollowContent => write!(f, "followContent"),
            FooterStyle::Default => write!(f, "default"),
        }
    }
}

/// Display strings that would normally come from a translation table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterLabels {
    #[serde(default = "default_powered_by", alias = "poweredBy")]
    pub powered_by: String,

    #[serde(default = "default_theme_by", alias = "themeBy")]
    pub theme_by: String,

    /// Uptime sentence with `{days}`, `{hours}` and `{minutes}` placeholders
    #[serde(default = "default_uptime_template", alias = "uptimeTemplate")]
    pub uptime_template: String,
}

impl Default for FooterLabels {
    fn default() -> Self {
        Self {
            powered_by: default_powered_by(),
            theme_by: default_theme_by(),
            uptime_template: default_uptime_template(),
        }
    }
}

fn default_powered_by() -> String {
    "Powered by".to_string()
}

fn default_theme_by() -> String {
    "Theme by".to_string()
}

fn default_uptime_template() -> String {
    "站点已运行 {days} 天 {hours} 小时 {minutes} 分钟".to_string()
}

/// Read-only configuration consumed by the footer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterConfig {
    #[serde(default, alias = "selectedFooterStyle")]
    pub footer_style: FooterStyle,

    #[serde(default, alias = "enableIcpRecord")]
    pub enable_icp_record: bool,

    #[serde(default, alias = "icpRecordNumber")]
    pub icp_record_number: String,

    #[serde(default, alias = "icpRecordLink")]
    pub icp_record_link: String,

    #[serde(default, alias = "enablePublicSecurityRecord")]
    pub enable_public_security_record: bool,

    #[serde(default, alias = "publicSecurityRecordNumber")]
    pub public_security_record_number: String,

    #[serde(default, alias = "publicSecurityRecordLink")]
    pub public_security_record_link: String,

    #[serde(default, alias = "enableSiteRuntime")]
    pub enable_site_runtime: bool,

    /// Launch instant the uptime counter starts from
    #[serde(default, alias = "siteStartTime")]
    pub site_start_time: String,

    #[serde(default)]
    pub labels: FooterLabels,
}

impl FooterConfig {
    /// Labels that render, but probably not as intended.
    ///
    /// A template without placeholders is shown verbatim.
    pub fn label_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let template = &self.labels.uptime_template;
        if self.enable_site_runtime
            && ![DAYS_PLACEHOLDER, HOURS_PLACEHOLDER, MINUTES_PLACEHOLDER]
                .iter()
                .any(|p| template.contains(p))
        {
            warnings.push(format!(
                "uptime_template {template:?} has none of {DAYS_PLACEHOLDER}, {HOURS_PLACEHOLDER}, {MINUTES_PLACEHOLDER}"
            ));
        }
        warnings
    }

    fn log_label_warnings(self) -> Self {
        for warning in self.label_warnings() {
            warn!("{}", warning);
        }
        self
    }
}

/// Parse a config snapshot from TOML text
pub fn parse_toml(content: &str) -> Result<FooterConfig> {
    let config: FooterConfig = toml::from_str(content)?;
    Ok(config.log_label_warnings())
}

/// Parse a config snapshot from JSON text (the theme's exported format)
pub fn parse_json(content: &str) -> Result<FooterConfig> {
    let config: FooterConfig = serde_json::from_str(content)?;
    Ok(config.log_label_warnings())
}

/// Load a config snapshot from disk.
///
/// Files ending in `.json` are read as JSON, everything else as TOML.
pub fn load_config(path: &Path) -> Result<FooterConfig> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let config = if is_json {
        parse_json(&content)?
    } else {
        parse_toml(&content)?
    };

    debug!("Loaded footer config from {}", path.display());
    Ok(config)
}

/// Load a config snapshot, falling back to defaults on any error
pub fn load_config_or_default(path: &Path) -> FooterConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load {}: {}, using defaults", path.display(), e);
            FooterConfig::default()
        }
    }
}
