use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Disabled by default: the TUI owns the terminal, so nothing may write
/// to stderr while it runs. Set `LEXIGO_LOG` to a file path to capture
/// the diagnostics for silently degraded operations (user-profile and
/// note fetch failures log here instead of surfacing an error).
pub fn init() {
    let Ok(log_path) = std::env::var("LEXIGO_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: failed to create log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
