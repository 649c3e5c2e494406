use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "metric_cards=info";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`]. Calling this twice is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .try_init()
        .ok();

    tracing::info!(version = %super::version::version_label(), "logging initialised");
}
