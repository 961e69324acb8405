//! Preview mode - render the footer outside the browser
//!
//! The footer is printed either as a short human-readable report or, with
//! `--json`, as NDJSON events (one JSON object per line) so scripts can follow
//! the uptime refreshes without scraping text.
//!
//! # Example Output
//!
//! ```json
//! {"event":"rendered","view":{"container_class":"fixed bottom-0 left-0 right-0 flex z-10","card_class":"...","right_inset":"0","segments":[...]},"timestamp":1704700001000}
//! {"event":"uptime_changed","text":"站点已运行 1 天 2 小时 4 分钟","timestamp":1704700061000}
//! {"event":"stopped","reason":"interrupted","timestamp":1704700090000}
//! ```

pub mod runner;

use chrono::Utc;
use footer_core::FooterView;
use serde::Serialize;
use std::io::{self, Write};

pub use runner::{run_preview, OutputFormat, PreviewOptions};

/// Events emitted in JSON preview mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PreviewEvent {
    /// Full footer rendered
    Rendered { view: FooterView, timestamp: i64 },

    /// Uptime text refreshed
    UptimeChanged { text: String, timestamp: i64 },

    /// Watch loop ended
    Stopped { reason: String, timestamp: i64 },
}

impl PreviewEvent {
    /// Write this event as one NDJSON line
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn rendered(view: &FooterView) -> Self {
        Self::Rendered {
            view: view.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn uptime_changed(text: &str) -> Self {
        Self::UptimeChanged {
            text: text.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn stopped(reason: &str) -> Self {
        Self::Stopped {
            reason: reason.to_string(),
            timestamp: Self::now(),
        }
    }
}

/// Human-readable report of a footer view
pub fn render_report(view: &FooterView) -> String {
    format!(
        "container: {}\ncard:      {}\nright:     {}\nfooter:    {}",
        view.container_class,
        view.card_class,
        view.right_inset,
        view.plain_text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use footer_core::{FooterConfig, Viewport};

    #[test]
    fn test_event_serialization() {
        let event = PreviewEvent::uptime_changed("up 1 day");
        let mut out = Vec::new();
        event.write_to(&mut out).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));

        let json: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(json["event"], "uptime_changed");
        assert_eq!(json["text"], "up 1 day");
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_rendered_event_embeds_view() {
        let view = FooterView::build(&FooterConfig::default(), false, Viewport::Desktop, "");
        let json = serde_json::to_value(PreviewEvent::rendered(&view)).unwrap();

        assert_eq!(json["event"], "rendered");
        assert_eq!(json["view"]["right_inset"], "0");
        assert_eq!(json["view"]["segments"][1]["text"], "PurCarte");
    }

    #[test]
    fn test_render_report() {
        let view = FooterView::build(&FooterConfig::default(), true, Viewport::Desktop, "");
        let report = render_report(&view);

        assert!(report.contains("right:     var(--setting-width)"));
        assert!(report.ends_with("footer:    Powered by Komari Monitor | Theme by PurCarte"));
    }
}
