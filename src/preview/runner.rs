//! Preview runner - render once, optionally follow uptime refreshes

use std::future::Future;
use std::io::Write;

use footer_core::prelude::*;
use footer_core::{FooterConfig, FooterView, UptimeClock, Viewport};

use super::{render_report, PreviewEvent};
use crate::ticker::UptimeTicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// NDJSON [`PreviewEvent`]s
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    pub config: FooterConfig,
    pub settings_open: bool,
    pub viewport: Viewport,
    pub format: OutputFormat,
    /// Keep running and reprint on every uptime refresh
    pub watch: bool,
}

/// Run the preview until Ctrl-C (only relevant with `watch`)
pub async fn run_preview(options: PreviewOptions, out: &mut impl Write) -> Result<()> {
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };
    run_preview_until(options, out, shutdown).await
}

/// Run the preview until `shutdown` resolves
pub async fn run_preview_until(
    options: PreviewOptions,
    out: &mut impl Write,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let PreviewOptions {
        config,
        settings_open,
        viewport,
        format,
        watch,
    } = options;

    info!(
        "Previewing footer: style={}, settings_open={}, viewport={:?}",
        config.footer_style, settings_open, viewport
    );

    let mut ticker = UptimeTicker::start(UptimeClock::from_config(&config));
    let view = FooterView::build(&config, settings_open, viewport, &ticker.current());
    write_view(&view, format, out)?;

    if !watch {
        return Ok(());
    }
    if !ticker.is_running() {
        info!("Uptime disabled, nothing to watch");
        return Ok(());
    }

    let mut rx = ticker.subscribe();
    tokio::pin!(shutdown);

    let reason = loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break "ticker closed";
                }
                let text = rx.borrow_and_update().clone();
                debug!("Uptime changed: {}", text);
                match format {
                    OutputFormat::Json => PreviewEvent::uptime_changed(&text).write_to(out)?,
                    OutputFormat::Text => {
                        let view = FooterView::build(&config, settings_open, viewport, &text);
                        writeln!(out, "footer:    {}", view.plain_text())?;
                    }
                }
            }
            _ = &mut shutdown => break "interrupted",
        }
    };

    ticker.stop();
    info!("Preview stopped: {}", reason);
    if format == OutputFormat::Json {
        PreviewEvent::stopped(reason).write_to(out)?;
    }
    Ok(())
}

fn write_view(view: &FooterView, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => PreviewEvent::rendered(view).write_to(out)?,
        OutputFormat::Text => writeln!(out, "{}", render_report(view))?,
    }
    Ok(())
}
