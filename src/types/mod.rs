//! Request and response types for the Panchang API.
//!
//! ## Organization
//!
//! - [`request`] — [`Location`] and [`PanchangKey`], the unit of work
//! - [`panchang`] — [`PanchangResult`] and its nested records
//! - [`calendar`] — [`BatchResultMap`] and date-range helpers

pub mod calendar;
pub mod panchang;
pub mod request;

pub use calendar::BatchResultMap;
pub use panchang::PanchangResult;
pub use request::{Location, PanchangKey};
