//! Progress and error reporting.
//!
//! All progress lines and errors go through `tracing`; the subscriber is
//! installed once by `main`.

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` with
/// `verbose` so every spawned command line is visible.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log an informational progress line.
pub fn log_info(text: &str) {
    tracing::info!("{}", text);
}

/// Report a failed step and return `false`.
///
/// The return value lets a caller report and fail in one expression.
pub fn report_error(event: &str, message: &str) -> bool {
    tracing::error!(event, "{}", message);
    false
}

/// Report a non-fatal problem.
pub fn report_warning(event: &str, message: &str) {
    tracing::warn!(event, "{}", message);
}
