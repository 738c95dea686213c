use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::DemoConfig;

/// Builds the filter from `RUST_LOG`, falling back to the configured directive.
pub fn env_filter(config: &DemoConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), &config.log_filter)
}

// Unset, blank or unparsable directives all fall back.
fn filter_from(directives: Option<&str>, fallback: &str) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Installs the stderr diagnostics subscriber. Safe to call more than once.
pub fn init(config: &DemoConfig) {
    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(config.color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // A second install (tests, repeated setup) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(config))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = DemoConfig::default();
        init(&config);
        init(&config);
    }

    #[test]
    fn test_valid_directives_win() {
        let filter = filter_from(Some("healthcare_patterns=debug"), "warn");
        assert_eq!(filter.to_string(), "healthcare_patterns=debug");
    }

    #[test]
    fn test_missing_directives_use_fallback() {
        assert_eq!(filter_from(None, "warn").to_string(), "warn");
        assert_eq!(filter_from(Some("  "), "warn").to_string(), "warn");
    }

    #[test]
    fn test_invalid_directives_use_fallback() {
        let filter = filter_from(Some("healthcare_patterns=loud"), "info");
        assert_eq!(filter.to_string(), "info");
    }
}
