//! Tracing subscriber setup

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_LOG_FILTER: &str = "facecheck=debug,tower_http=debug";

/// Install the global subscriber with a `RUST_LOG` filter.
///
/// Console output is compact in development and JSON lines in production.
/// Uses `try_init`, so a second call is a no-op.
pub fn init_telemetry(json_output: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let installed = if json_output {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        let console_fmt = tracing_subscriber::fmt::layer().event_format(
            Format::default()
                .compact()
                .with_target(false)
                .without_time(),
        );
        tracing_subscriber::registry()
            .with(filter)
            .with(console_fmt)
            .try_init()
    }
    .is_ok();

    if installed {
        tracing::debug!(json_output, "Tracing initialized");
    }
}
