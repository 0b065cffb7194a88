//! Gateway configuration.
//!
//! Everything the gateway needs from its environment is captured here once, at
//! construction time. Request logic never reads environment variables.

use std::time::Duration;

use crate::constants::{self, env};
use crate::error::{PanchangError, Result};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a [`PanchangClient`](crate::client::PanchangClient).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the upstream API (no trailing slash).
    pub base_url: String,
    /// Optional API key sent in the [`API_KEY_HEADER`](constants::API_KEY_HEADER).
    pub api_key: Option<String>,
    /// Number of dates fetched concurrently within one batch chunk.
    pub batch_size: usize,
    /// Cache lifetime for single-date lookups.
    pub today_ttl: Duration,
    /// Cache lifetime for batch/calendar lookups.
    pub calendar_ttl: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Whether concurrent fetches of the same URL share one upstream call.
    ///
    /// Waiters do not share the leader's failure: each retries in turn while
    /// holding the URL's gate, so duplicates of a hanging request queue up to
    /// one `request_timeout` apiece.
    pub coalesce_in_flight: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: constants::API_BASE_URL.to_owned(),
            api_key: None,
            batch_size: constants::BATCH_SIZE,
            today_ttl: constants::TODAY_TTL,
            calendar_ttl: constants::CALENDAR_TTL,
            request_timeout: constants::REQUEST_TIMEOUT,
            coalesce_in_flight: true,
        }
    }
}

impl GatewayConfig {
    /// Build a configuration from `PANCHANG_*` environment variables.
    ///
    /// Unset variables fall back to the defaults; present but unparsable
    /// numeric values are rejected.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = var(env::BASE_URL) {
            config.base_url = url;
        }
        config.api_key = var(env::API_KEY);
        if let Some(n) = parse_var::<usize>(env::BATCH_SIZE)? {
            config.batch_size = n.max(1);
        }
        if let Some(secs) = parse_var::<u64>(env::TODAY_TTL_SECS)? {
            config.today_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(env::CALENDAR_TTL_SECS)? {
            config.calendar_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(env::TIMEOUT_SECS)? {
            config.request_timeout = Duration::from_secs(secs);
        }

        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        Ok(config)
    }

    /// Start a builder seeded with the defaults.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }
}

/// Non-empty environment variable, if set.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match var(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            PanchangError::InvalidArgument(format!("{name} is not a valid number: {raw:?}"))
        }),
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`GatewayConfig`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use panchang_gateway::config::GatewayConfig;
///
/// let config = GatewayConfig::builder()
///     .base_url("https://panchang.internal")
///     .api_key("secret")
///     .batch_size(3)
///     .request_timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.batch_size, 3);
/// ```
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Set the upstream base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the batch chunk size (minimum 1). Default: 5.
    pub fn batch_size(mut self, n: usize) -> Self {
        self.config.batch_size = n.max(1);
        self
    }

    /// Set the single-date cache lifetime. Default: 300 s.
    pub fn today_ttl(mut self, ttl: Duration) -> Self {
        self.config.today_ttl = ttl;
        self
    }

    /// Set the batch/calendar cache lifetime. Default: 3,600 s.
    pub fn calendar_ttl(mut self, ttl: Duration) -> Self {
        self.config.calendar_ttl = ttl;
        self
    }

    /// Set the per-request timeout. Default: 10 s.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Enable or disable in-flight request coalescing. Default: true.
    pub fn coalesce_in_flight(mut self, enable: bool) -> Self {
        self.config.coalesce_in_flight = enable;
        self
    }

    /// Finish building.
    pub fn build(self) -> GatewayConfig {
        self.config
    }
}
