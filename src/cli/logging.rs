//! Diagnostic logging setup

use std::env;
use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--verbose` says otherwise
pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Build the filter: `RUST_LOG` wins when set and valid, otherwise
/// `--verbose` raises the default warn level to debug.
pub fn build_filter(verbose: bool) -> EnvFilter {
    filter_for(env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), verbose)
}

fn filter_for(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let from_env = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok());
    if let Some(filter) = from_env {
        return filter;
    }
    let level = if verbose { Level::DEBUG } else { DEFAULT_LEVEL };
    EnvFilter::new(level.as_str())
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
