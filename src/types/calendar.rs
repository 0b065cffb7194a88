//! Calendar helpers for multi-date lookups.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{PanchangError, Result};
use crate::types::panchang::PanchangResult;
use crate::types::request::DATE_FORMAT;

/// Results of a batch lookup keyed by ISO date.
///
/// Only dates whose fetch succeeded are present; a missing key means the day
/// is unavailable and should render as a placeholder. ISO keys iterate in
/// chronological order.
pub type BatchResultMap = BTreeMap<String, PanchangResult>;

/// Every date of a month, as ISO strings.
pub fn month_dates(year: i32, month: u32) -> Result<Vec<String>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        PanchangError::InvalidArgument(format!("invalid month {year}-{month:02}"))
    })?;
    Ok(first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect())
}

/// Seven consecutive dates starting at `start`.
pub fn week_dates(start: NaiveDate) -> Vec<String> {
    (0..7)
        .map(|i| (start + Duration::days(i)).format(DATE_FORMAT).to_string())
        .collect()
}
