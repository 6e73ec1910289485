//! Runtime configuration for the stock proxy.
//!
//! Resolved from the environment once per cold start and passed by
//! reference into the handler, so tests can inject their own values
//! without touching process state.

use std::time::Duration;

/// Production supplier endpoint used when no override is configured.
const DEFAULT_UPSTREAM: &str = "https://panel.khfy-store.com/api_v3/cek_stock_akrab_v2";

/// Default fetch timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Settings for one deployment of the proxy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream stock endpoint to proxy.
    pub upstream_url: String,
    /// Value for the `Access-Control-Allow-Origin` header.
    pub cors_origin: String,
    /// How long a single upstream fetch may take before it is aborted.
    pub fetch_timeout: Duration,
}

impl Config {
    /// Build a config from the environment.
    ///
    /// Recognized variables: `UPSTREAM_URL_XDA`, `CORS_ORIGIN`,
    /// `FETCH_TIMEOUT_MS`. Unset or unparsable values fall back to the
    /// defaults.
    pub fn from_env() -> Self {
        Config {
            upstream_url: std::env::var("UPSTREAM_URL_XDA")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            fetch_timeout: Duration::from_millis(
                std::env::var("FETCH_TIMEOUT_MS")
                    .ok()
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_MS),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upstream_url: DEFAULT_UPSTREAM.to_string(),
            cors_origin: "*".to_string(),
            fetch_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_production_panel() {
        let config = Config::default();
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM);
        assert_eq!(config.cors_origin, "*");
        assert_eq!(config.fetch_timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn test_from_env_falls_back_when_unset() {
        // The test process does not set any of the recognized variables,
        // so from_env must match the defaults.
        let config = Config::from_env();
        let defaults = Config::default();
        assert_eq!(config.upstream_url, defaults.upstream_url);
        assert_eq!(config.fetch_timeout, defaults.fetch_timeout);
    }
}
