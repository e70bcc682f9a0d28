//! Diagnostic logging setup
//!
//! Logs go to stderr so the NDJSON stream on stdout stays machine-readable.
//! `RUST_LOG` takes precedence over the verbosity flag.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "printwatch=info",
        1 => "printwatch=debug",
        _ => "printwatch=trace",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter)
        .try_init();
}
