//! Diagnostic logging to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `debug` or `hospital_db=trace`.
pub const LOG_ENV: &str = "HOSPITAL_DB_LOG";

/// Install the global subscriber. Defaults to `warn` so result tables on
/// stdout stay clean.
pub fn init() {
    let filter = EnvFilter::new(std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".into()));
    // a second init keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
