//! Log setup for the binary.
//!
//! Logs go to stderr so they never interleave with escape sequences on
//! stdout. The filter comes from `ANSIOUT_LOG` (e.g. `ANSIOUT_LOG=debug`).

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "ANSIOUT_LOG";

pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (tests); keep it
    let _ = subscriber.try_init();
}
