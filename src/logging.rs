//! Logging setup.
//!
//! `RUST_LOG` takes precedence; otherwise the `--log-level` directive is used. An
//! unparsable directive falls back to `info` rather than refusing to start.

use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "info";

/// Filter built from `RUST_LOG`, or from `default_directive` when it is unset.
pub fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Install the global subscriber. Returns `false` if one was already installed.
pub fn init(default_directive: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_directive))
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_directive_falls_back() {
        // Only meaningful when RUST_LOG is unset, which is the case under `cargo test`
        // unless the caller exports it.
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(filter("cluster=loud").to_string(), FALLBACK_DIRECTIVE);
            assert_eq!(filter("debug").to_string(), "debug");
        }
    }

    #[test]
    fn test_second_init_is_refused() {
        // The first call may lose to another test; either way a subscriber is set after it.
        init("warn");
        assert!(!init("debug"));
    }
}
