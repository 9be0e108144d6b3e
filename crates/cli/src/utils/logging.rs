//! Tracing subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

/// Build the log filter.
///
/// `--verbose` wins, then `RUST_LOG`, then the config file's `logLevel`.
pub fn build_filter(verbose: bool, configured_level: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured_level.unwrap_or(DEFAULT_LEVEL)))
}

/// Install the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init(verbose: bool, configured_level: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, configured_level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_verbose_filter() {
        let filter = build_filter(true, Some("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
