//! # panchang-gateway
//!
//! A batched, cache-aware client for an upstream Vedic Panchang computation
//! API. It fetches the daily Panchang (Tithi, Nakshatra, Rahu Kaal,
//! Choghadiya, …) for a date and location, validates it at the trust
//! boundary, and fetches whole calendars under a concurrency cap with
//! per-date failure isolation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use panchang_gateway::{PanchangClient, cities};
//! use panchang_gateway::types::PanchangKey;
//!
//! #[tokio::main]
//! async fn main() -> panchang_gateway::error::Result<()> {
//!     let client = PanchangClient::from_env()?;
//!     let delhi = cities::find("new-delhi").unwrap().location();
//!
//!     let diwali = client.fetch_one(&PanchangKey::new("2025-10-20", delhi.clone())).await?;
//!     println!("{} ({})", diwali.day_quality.label, diwali.day_quality.score);
//!
//!     let week = client.fetch_batch(&["2025-10-18", "2025-10-19", "2025-10-20"], &delhi).await;
//!     println!("{} of 3 days available", week.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod cities;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod inflight;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::PanchangClient;
/// Re-export the configuration type.
pub use config::GatewayConfig;
/// Re-export the error type and Result alias.
pub use error::{PanchangError, Result};
