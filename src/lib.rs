//! Site Footer Library
//!
//! Native side of the dashboard footer: the uptime ticker and the preview
//! renderer behind the `footer-preview` binary. Derivations live in
//! `footer-core`; the browser component lives in the `website` crate.

pub mod preview;
pub mod ticker;

pub use footer_core as core;
pub use preview::{run_preview, OutputFormat, PreviewOptions};
pub use ticker::UptimeTicker;
