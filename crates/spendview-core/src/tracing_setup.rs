use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing for the TUI process.
///
/// The terminal is owned by ratatui, so nothing may write to stdout/stderr.
/// Logging goes to a file only, and only when `SPENDVIEW_LOG_FILE` names
/// one; otherwise this installs nothing and tracing macros are no-ops.
pub fn init_tracing() {
    let Some(log_path) = std::env::var("SPENDVIEW_LOG_FILE").ok() else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        // Can't log the failure anywhere useful; run without logging.
        Err(_) => return,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spendview_core=debug,spendview_tui=debug,info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(file_layer).try_init();
}
