//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Build the level filter: `RUST_LOG` when set, else the configured directives.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber (M-LOG-STRUCTURED).
///
/// Call once, before the server starts.
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_current_span(false))
            .init(),
    }
}
