//! Periodic uptime recomputation
//!
//! [`UptimeTicker`] owns a tokio task that republishes the uptime text on a
//! watch channel: once synchronously at start, then every
//! [`UPTIME_REFRESH_INTERVAL`]. The task lives exactly as long as the ticker;
//! stopping or dropping it aborts the task, after which subscribers see the
//! channel close.

use chrono::{DateTime, Utc};
use footer_core::{UptimeClock, UPTIME_REFRESH_INTERVAL};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

pub struct UptimeTicker {
    rx: watch::Receiver<String>,
    handle: Option<JoinHandle<()>>,
}

impl UptimeTicker {
    /// Start ticking against the wall clock.
    ///
    /// With no clock (feature disabled or bad start time) the published text
    /// is empty and no task is spawned.
    pub fn start(clock: Option<UptimeClock>) -> Self {
        Self::start_with_clock(clock, Utc::now)
    }

    /// Start ticking against a caller-supplied time source.
    ///
    /// Must be called from within a tokio runtime when `clock` is `Some`.
    pub fn start_with_clock<F>(clock: Option<UptimeClock>, now: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + 'static,
    {
        let Some(clock) = clock else {
            let (_tx, rx) = watch::channel(String::new());
            return Self { rx, handle: None };
        };

        let (tx, rx) = watch::channel(clock.text_at(now()));

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(
                Instant::now() + UPTIME_REFRESH_INTERVAL,
                UPTIME_REFRESH_INTERVAL,
            );
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                let text = clock.text_at(now());
                trace!("Uptime refreshed: {}", text);
                if tx.send(text).is_err() {
                    debug!("Uptime receivers gone, ticker exiting");
                    break;
                }
            }
        });

        debug!(
            "Uptime ticker started, refreshing every {}s",
            UPTIME_REFRESH_INTERVAL.as_secs()
        );
        Self {
            rx,
            handle: Some(handle),
        }
    }

    /// Latest published uptime text
    pub fn current(&self) -> String {
        self.rx.borrow().clone()
    }

    /// A receiver notified on every refresh
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the refresh task; idempotent
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Uptime ticker stopped");
        }
    }
}

impl Drop for UptimeTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use footer_core::parse_site_start;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn test_clock() -> (UptimeClock, DateTime<Utc>) {
        let start = parse_site_start("2024-01-01T00:00:00Z").unwrap();
        (UptimeClock::new(start, "{days}/{hours}/{minutes}"), start)
    }

    /// Time source that reads `start + minutes`
    fn minutes_after(
        start: DateTime<Utc>,
        minutes: Arc<AtomicI64>,
    ) -> impl Fn() -> DateTime<Utc> + Send + 'static {
        move || start + TimeDelta::minutes(minutes.load(Ordering::SeqCst))
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_immediately() {
        let (clock, start) = test_clock();
        let minutes = Arc::new(AtomicI64::new(61));

        let ticker = UptimeTicker::start_with_clock(Some(clock), minutes_after(start, minutes));

        assert_eq!(ticker.current(), "0/1/1");
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refreshes_every_minute() {
        let (clock, start) = test_clock();
        let minutes = Arc::new(AtomicI64::new(0));

        let ticker =
            UptimeTicker::start_with_clock(Some(clock), minutes_after(start, minutes.clone()));
        let mut rx = ticker.subscribe();

        minutes.store(1, Ordering::SeqCst);
        tokio::time::advance(Duration::from_secs(60)).await;
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "0/0/1");

        minutes.store(24 * 60 + 2, Ordering::SeqCst);
        tokio::time::advance(Duration::from_secs(60)).await;
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "1/0/2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_refresh_before_interval() {
        let (clock, start) = test_clock();
        let minutes = Arc::new(AtomicI64::new(0));

        let ticker = UptimeTicker::start_with_clock(Some(clock), minutes_after(start, minutes));
        let mut rx = ticker.subscribe();

        tokio::time::advance(Duration::from_secs(59)).await;
        tokio::task::yield_now().await;
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_publishing() {
        let (clock, start) = test_clock();
        let minutes = Arc::new(AtomicI64::new(0));

        let ticker = UptimeTicker::start_with_clock(Some(clock), minutes_after(start, minutes));
        let mut rx = ticker.subscribe();
        drop(ticker);

        tokio::time::advance(Duration::from_secs(120)).await;
        // Sender is dropped with the aborted task; no value arrives first
        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), "0/0/0");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (clock, start) = test_clock();
        let minutes = Arc::new(AtomicI64::new(0));

        let mut ticker = UptimeTicker::start_with_clock(Some(clock), minutes_after(start, minutes));
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_absent_clock_publishes_empty_without_runtime() {
        let ticker = UptimeTicker::start(None);
        assert_eq!(ticker.current(), "");
        assert!(!ticker.is_running());
    }
}
