//! Stderr logging for the `photoslot` binary and for tests that want to see spans.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Install a global fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Span close events (with timings) are printed when the filter mentions `debug` or `trace`.
/// Calling this more than once is harmless; only the first call installs a subscriber.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let directives = env_filter.to_string();
    let verbose = directives.contains("debug") || directives.contains("trace");

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if verbose {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
