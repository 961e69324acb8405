//! footer-preview - render the dashboard footer in a terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use site_footer::core::{load_config, FooterConfig, Viewport};
use site_footer::{run_preview, OutputFormat, PreviewOptions};

/// footer-preview - render the dashboard footer from a config snapshot
#[derive(Parser, Debug)]
#[command(name = "footer-preview")]
#[command(about = "Render the dashboard footer from a config snapshot", long_about = None)]
struct Args {
    /// Footer config (TOML, or JSON with a .json extension); defaults if omitted
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Render as if the settings side panel were open
    #[arg(long)]
    settings_open: bool,

    /// Render for a mobile viewport
    #[arg(long, conflicts_with = "width")]
    mobile: bool,

    /// Classify the viewport from a width in CSS pixels
    #[arg(long, value_name = "PX")]
    width: Option<f64>,

    /// Output NDJSON events instead of text
    #[arg(long)]
    json: bool,

    /// Keep running and reprint on every uptime refresh
    #[arg(long)]
    watch: bool,
}

impl Args {
    fn viewport(&self) -> Viewport {
        match (self.mobile, self.width) {
            (true, _) => Viewport::Mobile,
            (false, Some(width)) => Viewport::from_width(width),
            (false, None) => Viewport::Desktop,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging failures shouldn't block a preview
    if let Err(e) = site_footer::core::logging::init(args.config.as_deref()) {
        eprintln!("Warning: file logging disabled: {e}");
    }

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => FooterConfig::default(),
    };

    let options = PreviewOptions {
        config,
        settings_open: args.settings_open,
        viewport: args.viewport(),
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        watch: args.watch,
    };

    let mut stdout = std::io::stdout().lock();
    run_preview(options, &mut stdout).await?;
    Ok(())
}
