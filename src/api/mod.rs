//! Endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`PanchangClient`](crate::client::PanchangClient) via `impl` blocks. All
//! methods handle URL construction, caching, HTTP transport and validation.
//!
//! ## Usage
//!
//! ```no_run
//! use panchang_gateway::PanchangClient;
//! use panchang_gateway::types::Location;
//!
//! # #[tokio::main]
//! # async fn main() -> panchang_gateway::Result<()> {
//! let client = PanchangClient::from_env()?;
//! let delhi = Location::new(28.6139, 77.209, "Asia/Kolkata");
//! let october = client.fetch_month(2025, 10, &delhi).await?;
//! for day in panchang_gateway::types::calendar::month_dates(2025, 10)? {
//!     match october.get(&day) {
//!         Some(p) => println!("{day}: {}", p.panchang.tithi.name),
//!         None => println!("{day}: unavailable"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`panchang`] | 1 | Single-date, batched, cancellable and monthly lookups |

pub mod panchang;
