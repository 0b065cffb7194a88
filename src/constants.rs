//! Constants for the upstream Panchang API.
//!
//! Contains the default endpoint, header names, cache lifetimes and batching
//! limits. These seed [`GatewayConfig::default`](crate::config::GatewayConfig)
//! and are exported for callers that want to reference the defaults directly.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

/// Default base URL for the Panchang computation API.
pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Resource path of the daily Panchang endpoint.
pub const PANCHANG_PATH: &str = "/api/v1/panchang";

/// Header carrying the API key, when one is configured.
pub const API_KEY_HEADER: &str = "x-api-key";

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameter names, in the order they are appended to request URLs.
pub mod params {
    /// ISO `YYYY-MM-DD` calendar date.
    pub const TARGET_DATE: &str = "target_date";
    /// Latitude in decimal degrees.
    pub const LATITUDE: &str = "latitude";
    /// Longitude in decimal degrees.
    pub const LONGITUDE: &str = "longitude";
    /// IANA timezone name.
    pub const TIMEZONE: &str = "timezone";
}

// ---------------------------------------------------------------------------
// Caching & batching
// ---------------------------------------------------------------------------

/// Cache lifetime for single-date ("today") lookups.
pub const TODAY_TTL: Duration = Duration::from_secs(300);

/// Cache lifetime for batch/calendar lookups. Historical days never change.
pub const CALENDAR_TTL: Duration = Duration::from_secs(3_600);

/// Maximum number of requests in flight during a batch.
pub const BATCH_SIZE: usize = 5;

/// Per-request timeout applied by the HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variables read by
/// [`GatewayConfig::from_env`](crate::config::GatewayConfig::from_env).
pub mod env {
    pub const BASE_URL: &str = "PANCHANG_API_BASE_URL";
    pub const API_KEY: &str = "PANCHANG_API_KEY";
    pub const BATCH_SIZE: &str = "PANCHANG_BATCH_SIZE";
    pub const TODAY_TTL_SECS: &str = "PANCHANG_TODAY_TTL_SECS";
    pub const CALENDAR_TTL_SECS: &str = "PANCHANG_CALENDAR_TTL_SECS";
    pub const TIMEOUT_SECS: &str = "PANCHANG_TIMEOUT_SECS";
}
