//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/site-footer/logs/`
/// Log level is controlled by `FOOTER_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FOOTER_LOG=debug footer-preview footer.toml
/// FOOTER_LOG=trace footer-preview footer.toml --watch
/// ```
pub fn init(config_path: Option<&Path>) -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "footer.log");

    // Default to info, allow override via FOOTER_LOG
    let env_filter = EnvFilter::try_from_env("FOOTER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("site_footer=info,footer_core=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        "footer-preview starting with {} (logs in {})",
        startup_context(config_path),
        log_dir.display()
    );

    Ok(())
}

/// Where the rendered footer's settings come from
fn startup_context(config_path: Option<&Path>) -> String {
    match config_path {
        Some(path) => format!("config {}", path.display()),
        None => "built-in defaults".to_string(),
    }
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("site-footer").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_site_footer() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("site-footer/logs"));
    }

    #[test]
    fn test_startup_context_names_config_source() {
        assert_eq!(
            startup_context(Some(Path::new("footer.toml"))),
            "config footer.toml"
        );
        assert_eq!(startup_context(None), "built-in defaults");
    }
}
