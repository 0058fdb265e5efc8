//! Diagnostic logging for the binary.
//!
//! The library only emits `tracing` events. This installs the subscriber that
//! prints them to stderr, so rendered views on stdout stay clean.
//!
//! `RUST_LOG` wins when set. Otherwise only warnings are shown, or everything
//! from folio at debug level with `--verbose`.

use folio::error::{FolioError, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{registry, EnvFilter};

fn filter_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,folio=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool, use_color: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose)));

    let stderr_layer = fmt::layer()
        .with_target(verbose)
        .with_level(true)
        .without_time()
        .with_ansi(use_color)
        .with_writer(std::io::stderr);

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| FolioError::Api(format!("Could not initialize logging: {}", e)))
}
