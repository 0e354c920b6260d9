//! Logging and tracing setup

use anyhow::Result;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt, EnvFilter,
};

/// Initialize logging. The filter honors `RUST_LOG` and defaults to
/// `info`; bids and sales log at info, reservation math at debug.
pub fn initialize_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(false).with_ansi(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();

    Ok(())
}
