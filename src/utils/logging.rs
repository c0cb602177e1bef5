//! File-based tracing setup.
//!
//! The terminal belongs to the UI while a game runs, so there is no console
//! layer. Logs go to `~/.arcade/logs/arcade.log` with daily rotation.
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=arcade::games=trace` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter when RUST_LOG is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize the file logger.
///
/// Returns `false` when the log directory could not be created; the game
/// still runs, just without logs.
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let logs_dir = match crate::utils::persistence::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            return false;
        }
    };

    let file_appender = tracing_appender::rolling::daily(logs_dir, "arcade.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .is_ok()
}
