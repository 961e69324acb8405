//! # footer-core - Dashboard Footer Domain
//!
//! Pure derivations behind the dashboard footer: configuration, record links,
//! uptime text, layout classes and the ordered segment list. Nothing here
//! touches the DOM or spawns timers, so the same code drives the Leptos
//! component and the native preview.
//!
//! ## Public API
//!
//! ### Configuration (`config`)
//! - [`FooterConfig`] - Read-only snapshot the footer is rendered from
//! - [`FooterStyle`] - Levitation, follow-content or default positioning
//! - [`FooterLabels`] - Attribution prefixes and the uptime template
//! - [`load_config()`] - Load a TOML or JSON snapshot from disk
//!
//! ### Links (`links`)
//! - [`record_authority_link()`] - ICP anchor target
//! - [`public_security_link()`] - Public-security anchor target
//!
//! ### Uptime (`uptime`)
//! - [`UptimeClock`] - Parsed start instant plus template, present only when shown
//! - [`uptime_text()`] - Uptime string for a config at a given instant
//!
//! ### Layout (`layout`)
//! - [`Viewport`] - Mobile / desktop classification
//! - [`container_class()`], [`card_class()`], [`right_inset()`]
//!
//! ### Segments (`segments`) and View (`view`)
//! - [`FooterSegment`] - One piece of the footer line
//! - [`FooterView`] - Layout and segments assembled together
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod config;
pub mod error;
pub mod layout;
pub mod links;
#[cfg(feature = "logging")]
pub mod logging;
pub mod segments;
pub mod uptime;
pub mod view;

/// Prelude for common imports used throughout the footer crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use config::{
    load_config, load_config_or_default, parse_json, parse_toml, FooterConfig, FooterLabels,
    FooterStyle,
};
pub use error::{Error, Result, ResultExt};
pub use layout::{
    card_class, class_names, container_class, right_inset, Viewport, MOBILE_BREAKPOINT_PX,
    SETTINGS_PANEL_WIDTH,
};
pub use links::{
    public_security_href, public_security_link, record_authority_link, record_digits,
    PUBLIC_SECURITY_PORTAL_URL, RECORD_AUTHORITY_URL,
};
pub use segments::{
    footer_segments, record_visible, render_plain, FooterSegment, SegmentKind, SEGMENT_SEPARATOR,
};
pub use uptime::{parse_site_start, uptime_text, Uptime, UptimeClock, UPTIME_REFRESH_INTERVAL};
pub use view::FooterView;
