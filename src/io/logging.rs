//! Structured logging to stderr
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber once at startup.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count when `RUST_LOG` is unset
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,kolam=info",
        2 => "info,kolam=debug",
        _ => "debug,kolam=trace",
    }
}

/// Install the global fmt subscriber
///
/// `RUST_LOG` overrides the verbosity-derived filter. Returns `false` if a
/// subscriber was already installed.
pub fn init_logging(verbosity: u8) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
