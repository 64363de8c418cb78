use crate::config::RunMode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` directives win over `log_level`. Local runs get the compact
/// human-readable format; hosted runs log one JSON object per line without
/// colours so the platform's log collector can parse them.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(log_level: &str, mode: RunMode) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let registry = tracing_subscriber::registry().with(filter);
    match mode {
        RunMode::Local => registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .try_init(),
        RunMode::Hosted => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_target(true)
                    .without_time(),
            )
            .try_init(),
    }
}
