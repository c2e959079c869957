//! Tracing setup for the binary. Library crates only emit events.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target log directives,
/// e.g. `THROWGUARD_LOG=throwguard_enforce=trace`.
pub(crate) const LOG_ENV: &str = "THROWGUARD_LOG";

/// Install the global subscriber, writing to stderr.
///
/// `THROWGUARD_LOG` wins when set and valid; otherwise `--verbose` selects
/// `debug` and the default is `warn`.
pub(crate) fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (tests) is not an error worth reporting.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
