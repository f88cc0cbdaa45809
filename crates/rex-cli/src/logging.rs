//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics go to stderr so table and JSON output on stdout stay
//! machine-readable. `RUST_LOG` overrides the verbosity flags when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the global subscriber. Call once at startup.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
