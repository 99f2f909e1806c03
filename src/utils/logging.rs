use std::env;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system with the specified log level.
///
/// Events go to stderr so that stdout carries nothing but results.
pub fn init_logging(default_level: &str) {
    // RUST_LOG wins over the configured level
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .finish();

    // A subscriber may already be installed (tests); keep the existing one
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of loading one range source
pub fn log_fetch_event(source: &str, success: bool, count: usize, details: Option<&str>) {
    if success {
        tracing::info!(
            source = %source,
            ranges = %count,
            details = ?details,
            event = "range_fetch",
            timestamp = %chrono::Utc::now()
        );
    } else {
        tracing::warn!(
            source = %source,
            ranges = %count,
            details = ?details,
            event = "range_fetch_failed",
            timestamp = %chrono::Utc::now()
        );
    }
}

/// Log the totals of a classification pass
pub fn log_classification_summary(total: usize, cdn: usize, real: usize) {
    tracing::info!(
        total = %total,
        cdn = %cdn,
        real = %real,
        event = "classification_complete",
        timestamp = %chrono::Utc::now()
    );
}
