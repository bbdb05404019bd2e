//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter directives; `RUST_LOG` replaces them entirely when set.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("{level},nhl_etl={level},sqlx=warn,reqwest=warn,hyper=warn")
}

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}
