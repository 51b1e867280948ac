//! Configuration loading and constants.
//!
//! The service is configured entirely from the environment: `APP_MESSAGE`
//! overrides the greeting served at the root route, and `RUST_LOG` overrides
//! the tracing filter. Everything else (bind address, startup delay, cache
//! headers) is a named constant, with the runtime-relevant values captured in
//! `AppConfig` so tests can inject their own.

use const_format::formatcp;
use std::time::Duration;

/// Environment variable that overrides the root route's greeting.
pub const MESSAGE_ENV_VAR: &str = "APP_MESSAGE";

/// Greeting served when `APP_MESSAGE` is unset or empty.
pub const DEFAULT_MESSAGE: &str = "Hello from the Backend API!";

/// Bind address. All interfaces, so the service is reachable from outside
/// its container.
pub const BIND_HOST: &str = "0.0.0.0";

/// Listener port.
pub const BIND_PORT: u16 = 5000;

/// Seconds to sleep before binding the listener, staggering startup
/// relative to other orchestrated services.
pub const STARTUP_DELAY_SECS: u64 = 5;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "backend_api=debug";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// The greeting is constant for the process lifetime, so upstream caches may
// hold it briefly. Probe routes carry no cache header; orchestrators must
// always see a fresh response.

/// Greeting route - content only changes across restarts
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str =
    formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// Process-wide configuration, constructed once at startup and held
/// immutably for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Body of the root route.
    pub message: String,
    /// Host to bind the HTTP listener on.
    pub host: String,
    /// Port to bind the HTTP listener on.
    pub port: u16,
    /// Unconditional delay before the listener binds.
    pub startup_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            host: BIND_HOST.to_string(),
            port: BIND_PORT,
            startup_delay: Duration::from_secs(STARTUP_DELAY_SECS),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// An unset or empty `APP_MESSAGE` falls back to [`DEFAULT_MESSAGE`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let message = lookup(MESSAGE_ENV_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string());

        Self {
            message,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn default_message_when_empty() {
        let config = AppConfig::from_lookup(|_| Some(String::new()));
        assert_eq!(config.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn message_from_environment() {
        let config = AppConfig::from_lookup(|key| {
            (key == MESSAGE_ENV_VAR).then(|| "custom text".to_string())
        });
        assert_eq!(config.message, "custom text");
    }

    #[test]
    fn defaults_match_service_contract() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.startup_delay, Duration::from_secs(5));
    }
}
