//! Core HTTP client for the upstream Panchang API.
//!
//! The [`PanchangClient`] struct is the single gateway between page-rendering
//! code and the upstream computation service. It wraps [`reqwest::Client`]
//! with the default headers, the optional API key and a request timeout, and
//! owns the [`ResponseCache`] and [`InFlight`] table shared by every clone.
//!
//! High-level lookup methods are added to `PanchangClient` via `impl` blocks
//! in the [`crate::api`] module.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{self, HeaderMap, HeaderValue};
use url::Url;

use crate::cache::ResponseCache;
use crate::config::GatewayConfig;
use crate::constants::{API_KEY_HEADER, PANCHANG_PATH, params};
use crate::error::{PanchangError, Result};
use crate::inflight::InFlight;
use crate::types::request::PanchangKey;

/// Core HTTP client for the Panchang API.
///
/// Cheap to clone: clones share the connection pool, cache and in-flight
/// table.
///
/// # Example
///
/// ```no_run
/// use panchang_gateway::client::PanchangClient;
/// use panchang_gateway::types::{Location, PanchangKey};
///
/// # #[tokio::main]
/// # async fn main() -> panchang_gateway::error::Result<()> {
/// let client = PanchangClient::from_env()?;
/// let delhi = Location::new(28.6139, 77.209, "Asia/Kolkata");
/// let today = client.fetch_one(&PanchangKey::new("2025-10-20", delhi)).await?;
/// println!("{}", today.day_quality.label);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PanchangClient {
    http: reqwest::Client,
    config: GatewayConfig,
    /// Endpoint URL without query, parsed once at construction.
    endpoint: Url,
    cache: ResponseCache,
    in_flight: InFlight,
}

impl PanchangClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(GatewayConfig::default())
    }

    /// Create a client configured from `PANCHANG_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(GatewayConfig::from_env()?)
    }

    /// Create a client pointing at a custom base URL.
    ///
    /// Useful for testing against a stub server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(GatewayConfig::builder().base_url(base_url).build())
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers(config.api_key.as_deref())?)
            .timeout(config.request_timeout)
            .build()?;

        let endpoint = Url::parse(&format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            PANCHANG_PATH
        ))?;

        let cache = ResponseCache::with_retention(config.today_ttl.max(config.calendar_ttl));

        Ok(Self {
            http,
            config,
            endpoint,
            cache,
            in_flight: InFlight::new(),
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns the response cache shared by this client and its clones.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Build the request URL for `key`.
    ///
    /// Parameters are always appended in the same order with the same
    /// formatting, so identical keys yield byte-identical URLs.
    pub fn request_url(&self, key: &PanchangKey) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(params::TARGET_DATE, &key.date)
            .append_pair(params::LATITUDE, &key.location.latitude.to_string())
            .append_pair(params::LONGITUDE, &key.location.longitude.to_string())
            .append_pair(params::TIMEZONE, &key.location.timezone);
        url
    }

    // -----------------------------------------------------------------------
    // Cached transport
    // -----------------------------------------------------------------------

    /// Fetch the body at `url`, serving it from the cache when it was stored
    /// less than `ttl` ago. A zero `ttl` always reaches the upstream.
    ///
    /// `accept` sees the body of a fresh upstream response; only when it
    /// returns `Ok` is the body cached. Concurrent calls for the same URL are
    /// coalesced when enabled in the config.
    pub(crate) async fn get_cached<T>(
        &self,
        url: &Url,
        ttl: Duration,
        accept: impl Fn(&[u8]) -> Result<T>,
    ) -> Result<T> {
        let _gate = if self.config.coalesce_in_flight {
            Some(self.in_flight.acquire(url.as_str()).await)
        } else {
            None
        };

        if let Some(body) = self.cache.get(url.as_str(), ttl) {
            tracing::debug!(%url, "cache hit");
            return accept(&body);
        }

        let body = self.get_bytes(url).await?;
        let value = accept(&body)?;
        self.cache.insert(url.as_str(), body, ttl);
        Ok(value)
    }

    /// Perform a GET request and return the raw success body.
    pub(crate) async fn get_bytes(&self, url: &Url) -> Result<Bytes> {
        tracing::debug!(%url, "GET");

        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();

        if status.is_success() {
            Ok(resp.bytes().await?)
        } else {
            // Error path: the status is the error, the body only context.
            let bytes = resp.bytes().await.unwrap_or_default();
            Err(PanchangError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Headers applied to every request.
    fn default_headers(api_key: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key).map_err(|_| {
                PanchangError::InvalidArgument("API key contains invalid header characters".into())
            })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }
        Ok(headers)
    }
}
