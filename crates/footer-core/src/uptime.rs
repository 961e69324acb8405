//! Site uptime text
//!
//! The footer shows how long the site has been running, counted from a
//! configured launch instant. Everything here is a pure function of the
//! config and "now"; the periodic refresh lives with the caller (the tokio
//! ticker natively, an interval in the browser).

use crate::config::{FooterConfig, DAYS_PLACEHOLDER, HOURS_PLACEHOLDER, MINUTES_PLACEHOLDER};
use crate::error::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// How often the uptime text is recomputed
pub const UPTIME_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Naive date-time layouts, interpreted in the local timezone
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Minute-precision layouts carrying an explicit offset (`Z` is normalized first)
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
];

static YEAR_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Invalid YEAR_ONLY regex"));

static YEAR_MONTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}$").expect("Invalid YEAR_MONTH regex"));

/// Parse a configured site start time.
///
/// Accepted forms, following what a browser `Date` accepts:
/// - RFC 3339 (`2024-01-01T08:00:00+08:00`) and RFC 2822
/// - `YYYY-MM-DDTHH:MM` followed by `Z` or an offset
/// - `YYYY-MM-DD HH:MM[:SS]`, with `T` or `/` variants, as local time
/// - `YYYY-MM-DD`, `YYYY-MM` and `YYYY`, as UTC midnight
///
/// Bare digit strings other than a four-digit year are rejected.
pub fn parse_site_start(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_timestamp(value));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let with_offset = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| Error::invalid_timestamp(value));
        }
    }

    let date_only = if YEAR_ONLY.is_match(trimmed) {
        format!("{trimmed}-01-01")
    } else if YEAR_MONTH.is_match(trimmed) {
        format!("{trimmed}-01")
    } else {
        trimmed.to_string()
    };
    NaiveDate::parse_from_str(&date_only, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::invalid_timestamp(value))
}

/// Elapsed time broken into whole days, hours and minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uptime {
    pub days: i64,
    /// 0..=23
    pub hours: i64,
    /// 0..=59
    pub minutes: i64,
}

impl Uptime {
    /// Elapsed time from `start` to `now`, zero if `start` is in the future
    pub fn between(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = (now - start).max(TimeDelta::zero());
        Self {
            days: elapsed.num_days(),
            hours: elapsed.num_hours() % 24,
            minutes: elapsed.num_minutes() % 60,
        }
    }

    /// Fill the `{days}`, `{hours}` and `{minutes}` placeholders
    pub fn render(&self, template: &str) -> String {
        template
            .replace(DAYS_PLACEHOLDER, &self.days.to_string())
            .replace(HOURS_PLACEHOLDER, &self.hours.to_string())
            .replace(MINUTES_PLACEHOLDER, &self.minutes.to_string())
    }
}

/// A resolved uptime source: parsed start instant plus display template.
///
/// Exists only while the feature is enabled and the start time is valid, so
/// "no clock" is the single representation of an absent uptime segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UptimeClock {
    start: DateTime<Utc>,
    template: String,
}

impl UptimeClock {
    pub fn new(start: DateTime<Utc>, template: impl Into<String>) -> Self {
        Self {
            start,
            template: template.into(),
        }
    }

    /// Resolve the clock from config; `None` means the segment is absent
    pub fn from_config(config: &FooterConfig) -> Option<Self> {
        if !config.enable_site_runtime || config.site_start_time.is_empty() {
            return None;
        }

        match parse_site_start(&config.site_start_time) {
            Ok(start) => Some(Self::new(start, config.labels.uptime_template.clone())),
            Err(e) => {
                debug!("Uptime hidden: {}", e);
                None
            }
        }
    }

    pub fn uptime_at(&self, now: DateTime<Utc>) -> Uptime {
        Uptime::between(self.start, now)
    }

    pub fn text_at(&self, now: DateTime<Utc>) -> String {
        self.uptime_at(now).render(&self.template)
    }
}

/// Uptime text for `config` at `now`; empty whenever the segment is absent
pub fn uptime_text(config: &FooterConfig, now: DateTime<Utc>) -> String {
    UptimeClock::from_config(config)
        .map(|clock| clock.text_at(now))
        .unwrap_or_default()
}
