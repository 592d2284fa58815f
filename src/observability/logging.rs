//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - RUST_LOG wins over the configured level when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
///
/// The environment filter is taken from `RUST_LOG` when present, otherwise
/// derived from the configured log level.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!(
        "image_proxy={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
