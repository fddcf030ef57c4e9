//! Logging setup for the Reviewify service.
//!
//! All crates log through `tracing`; the binary calls [`init`] once at
//! startup to install the subscriber.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at the default INFO level.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific minimum level.
///
/// `RUST_LOG` still takes precedence for targeted overrides; the level here
/// only sets the default for the `reviewify` crates. Uses `try_init` so a
/// second call (e.g. from a test harness) is a no-op instead of a panic.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("reviewify={}", level).parse().unwrap());

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
