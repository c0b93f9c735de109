//! Logging setup.
//!
//! Diagnostics go to stderr through a `tracing-subscriber` fmt layer so
//! stdout stays clean for command output. `RUST_LOG` takes precedence over
//! the `-v` flag.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity count.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
