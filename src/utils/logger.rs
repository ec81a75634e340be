use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Sets up the global tracing subscriber
///
/// The level is taken from the `LOGLEVEL` environment variable
/// (`DEBUG`, `INFO`, `WARN`, `ERROR` or `TRACE`), defaulting to `INFO`.
/// Calling this more than once is a no-op.
pub fn setup_logger() {
    INIT.call_once(|| {
        let log_level = env::var("LOGLEVEL")
            .unwrap_or_else(|_| "INFO".to_string())
            .to_uppercase();

        let level = match log_level.as_str() {
            "DEBUG" => Level::DEBUG,
            "ERROR" => Level::ERROR,
            "WARN" => Level::WARN,
            "TRACE" => Level::TRACE,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        // Another subscriber may already be installed by the host application
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
