//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays reserved for the table and JSON events.
//! `RUST_LOG` takes precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Level directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(format!("dcfcalc={}", level_for_verbosity(verbose)))
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: u8, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(verbose >= 2)
        .without_time()
        .try_init();

    tracing::debug!(verbose, "logging initialized");
}
