//! Logging utilities
//!
//! Provides logging configuration and helpers.

use tracing_subscriber::EnvFilter;

/// Initialize the logger.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at info, or debug
/// when verbose is requested.
pub fn init_logger(verbose: bool) {
    let default_directive = if verbose {
        "ollama_eval=debug"
    } else {
        "ollama_eval=info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
