//! Request key types — where and when a Panchang is computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PanchangError, Result};

/// Date format accepted by the upstream `target_date` parameter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Observer location shared by every date of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Decimal degrees, north positive.
    pub latitude: f64,
    /// Decimal degrees, east positive.
    pub longitude: f64,
    /// IANA timezone name (e.g. `Asia/Kolkata`).
    pub timezone: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, timezone: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            timezone: timezone.into(),
        }
    }

    /// Check coordinate ranges and that a timezone is present.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PanchangError::InvalidArgument(format!(
                "latitude out of range: {}",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PanchangError::InvalidArgument(format!(
                "longitude out of range: {}",
                self.longitude
            )));
        }
        if self.timezone.trim().is_empty() {
            return Err(PanchangError::InvalidArgument("timezone is empty".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Request key
// ---------------------------------------------------------------------------

/// One unit of work: a calendar date at a location.
///
/// Identical keys always produce identical request URLs, which makes the key
/// the natural cache and coalescing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanchangKey {
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub location: Location,
}

impl PanchangKey {
    pub fn new(date: impl Into<String>, location: Location) -> Self {
        Self {
            date: date.into(),
            location,
        }
    }

    /// Build a key from a parsed date.
    pub fn on(date: NaiveDate, location: Location) -> Self {
        Self::new(date.format(DATE_FORMAT).to_string(), location)
    }

    /// Validate the date string and the location.
    pub fn validate(&self) -> Result<()> {
        self.parsed_date()?;
        self.location.validate()
    }

    /// The key's date, parsed.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|e| {
            PanchangError::InvalidArgument(format!("invalid date {:?}: {e}", self.date))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi() -> Location {
        Location::new(28.6139, 77.209, "Asia/Kolkata")
    }

    #[test]
    fn valid_key_passes() {
        assert!(PanchangKey::new("2025-10-20", delhi()).validate().is_ok());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        for date in ["2025-13-01", "20-10-2025", "2025-02-30", ""] {
            let err = PanchangKey::new(date, delhi()).validate().unwrap_err();
            assert!(matches!(err, PanchangError::InvalidArgument(_)), "{date}");
        }
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let key = PanchangKey::new("2025-10-20", Location::new(91.0, 77.0, "Asia/Kolkata"));
        assert!(key.validate().is_err());
        let key = PanchangKey::new("2025-10-20", Location::new(28.0, -181.0, "Asia/Kolkata"));
        assert!(key.validate().is_err());
        let key = PanchangKey::new("2025-10-20", Location::new(28.0, 77.0, " "));
        assert!(key.validate().is_err());
    }

    #[test]
    fn key_from_naive_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date");
        assert_eq!(PanchangKey::on(date, delhi()).date, "2025-01-05");
    }
}
