//! Record link derivation
//!
//! Both links are pure functions of their source fields so the web view can
//! memoize them on exactly those fields.

use regex::Regex;
use std::sync::LazyLock;

/// MIIT record lookup used when no ICP link is configured
pub const RECORD_AUTHORITY_URL: &str = "https://beian.miit.gov.cn/";

/// Public-security portal, used when no per-record lookup can be built
pub const PUBLIC_SECURITY_PORTAL_URL: &str = "https://www.beian.gov.cn/";

/// Per-record lookup on the public-security portal
pub const PUBLIC_SECURITY_LOOKUP_URL: &str =
    "https://www.beian.gov.cn/portal/registerSystemInfo?recordcode=";

/// Attribution link for the monitoring backend
pub const ATTRIBUTION_NAME: &str = "Komari Monitor";
pub const ATTRIBUTION_URL: &str = "https://github.com/komari-monitor/komari";

/// Attribution link for the theme
pub const THEME_CREDIT_NAME: &str = "PurCarte";
pub const THEME_CREDIT_URL: &str = "https://github.com/Montia37/komari-theme-purcarte";

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("Invalid NON_DIGIT regex"));

/// Link target for the ICP segment.
///
/// Any non-empty configured link wins, even whitespace.
pub fn record_authority_link(icp_record_link: &str) -> String {
    if icp_record_link.is_empty() {
        RECORD_AUTHORITY_URL.to_string()
    } else {
        icp_record_link.to_string()
    }
}

/// Link target for the public-security segment, or empty when none applies.
///
/// A configured link that is blank after trimming is ignored; otherwise the
/// record number's ASCII digits parameterize the portal lookup.
pub fn public_security_link(link: &str, record_number: &str) -> String {
    if !link.trim().is_empty() {
        return link.to_string();
    }

    let digits = record_digits(record_number);
    if digits.is_empty() {
        return String::new();
    }

    // Digits only, so no query escaping is needed
    format!("{PUBLIC_SECURITY_LOOKUP_URL}{digits}")
}

/// Anchor target actually rendered for the public-security segment
pub fn public_security_href(derived_link: &str) -> String {
    if derived_link.is_empty() {
        PUBLIC_SECURITY_PORTAL_URL.to_string()
    } else {
        derived_link.to_string()
    }
}

/// ASCII digits of a record number, in order
pub fn record_digits(record_number: &str) -> String {
    NON_DIGIT.replace_all(record_number, "").into_owned()
}
