//! Error types for the `panchang-gateway` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, PanchangError>`.
//!
//! [`PanchangError`] covers:
//! - **HTTP status errors** — Non-2xx responses from the upstream API
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON / schema errors** — Bodies that do not decode or fail validation
//! - **URL errors** — Malformed base URL
//! - **Invalid arguments** — Client-side validation of keys and config
//! - **Cancellation** — A batch aborted by its caller
//!
//! Callers rendering a page treat every variant the same way: the data is
//! unavailable.

/// All possible errors produced by the Panchang gateway.
#[derive(Debug, thiserror::Error)]
pub enum PanchangError {
    /// The upstream returned a non-2xx HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`, timeouts included.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not valid JSON for the expected shape.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded but violates a structural invariant.
    #[error("schema validation failed: {0}")]
    Schema(String),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The caller cancelled the operation before it finished.
    #[error("operation cancelled")]
    Cancelled,
}

impl PanchangError {
    /// Whether the error is a request that ran past the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// Whether the upstream body was rejected by decoding or validation.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Schema(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanchangError>;
