#![allow(missing_docs)]
//! Panchang response types — day quality, the five limbs, hora, muhurta
//! windows, choghadiya and planetary positions.
//!
//! Every field the upstream always sends is required; a missing one fails
//! deserialization. [`PanchangResult::validate`] adds the structural checks
//! serde cannot express. A result is only handed to callers after both pass.

use serde::{Deserialize, Serialize};

use crate::error::{PanchangError, Result};

/// Number of planetary hours in a civil day.
pub const HORA_SLOTS: usize = 24;

/// Choghadiya slots in each of the day and night halves.
pub const CHOGHADIYA_SLOTS: usize = 8;

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Validated Panchang for one date at one location.
///
/// Returned by `GET /api/v1/panchang`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanchangResult {
    /// ISO date the Panchang was computed for.
    pub date: String,
    pub sunrise: String,
    pub sunset: String,
    #[serde(default)]
    pub moonrise: Option<String>,
    #[serde(default)]
    pub moonset: Option<String>,
    pub day_quality: DayQuality,
    pub panchang: Limbs,
    pub moon_phase: MoonPhase,
    pub hora: Vec<HoraSlot>,
    pub muhurta: MuhurtaWindows,
    pub choghadiya: Choghadiya,
    pub planetary_positions: Vec<PlanetPosition>,
    #[serde(default)]
    pub festivals: Vec<Observance>,
    #[serde(default)]
    pub vrats: Vec<Observance>,
    #[serde(default)]
    pub muhurta_yogas: Vec<MuhurtaYoga>,
}

impl PanchangResult {
    /// Check the invariants serde cannot: echoed date, value ranges and
    /// timeline lengths.
    pub fn validate(&self, expected_date: &str) -> Result<()> {
        if self.date != expected_date {
            return Err(schema(format!(
                "date {:?} does not match requested {expected_date:?}",
                self.date
            )));
        }

        let score = self.day_quality.score;
        if !score.is_finite() || !(0.0..=100.0).contains(&score) {
            return Err(schema(format!("day_quality.score out of range: {score}")));
        }

        let limbs = &self.panchang;
        check_index("panchang.tithi.tithi", limbs.tithi.tithi, 30)?;
        check_index("panchang.nakshatra.nakshatra", limbs.nakshatra.nakshatra, 27)?;
        check_index("panchang.nakshatra.pada", limbs.nakshatra.pada, 4)?;
        check_index("panchang.yoga.yoga", limbs.yoga.yoga, 27)?;
        check_index("panchang.vara.vara", limbs.vara.vara, 7)?;

        let illumination = self.moon_phase.illumination;
        if !(0.0..=100.0).contains(&illumination) {
            return Err(schema(format!(
                "moon_phase.illumination out of range: {illumination}"
            )));
        }

        if self.hora.len() != HORA_SLOTS {
            return Err(schema(format!(
                "expected {HORA_SLOTS} hora slots, got {}",
                self.hora.len()
            )));
        }
        for (half, slots) in [
            ("day", &self.choghadiya.day),
            ("night", &self.choghadiya.night),
        ] {
            if slots.len() != CHOGHADIYA_SLOTS {
                return Err(schema(format!(
                    "expected {CHOGHADIYA_SLOTS} {half} choghadiya slots, got {}",
                    slots.len()
                )));
            }
        }

        if let Some(p) = self
            .planetary_positions
            .iter()
            .find(|p| !(0.0..360.0).contains(&p.longitude))
        {
            return Err(schema(format!(
                "{} longitude out of range: {}",
                p.planet, p.longitude
            )));
        }

        Ok(())
    }

    /// Whether any festival falls on this date.
    pub fn is_festival_day(&self) -> bool {
        !self.festivals.is_empty()
    }
}

fn schema(msg: String) -> PanchangError {
    PanchangError::Schema(msg)
}

/// 1-based index within `1..=max`.
fn check_index(field: &str, value: u8, max: u8) -> Result<()> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(schema(format!("{field} must be within 1..={max}, got {value}")))
    }
}

// ---------------------------------------------------------------------------
// Day quality
// ---------------------------------------------------------------------------

/// Overall auspiciousness of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayQuality {
    /// 0–100.
    pub score: f64,
    pub label: String,
}

// ---------------------------------------------------------------------------
// The five limbs
// ---------------------------------------------------------------------------

/// Tithi, Nakshatra, Yoga, Karana and Vara.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limbs {
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
    pub vara: Vara,
}

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paksha {
    /// Waxing.
    Shukla,
    /// Waning.
    Krishna,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tithi {
    /// 1–30; 15 is Purnima, 30 is Amavasya.
    pub tithi: u8,
    pub name: String,
    pub paksha: Paksha,
    pub deity: String,
    pub nature: String,
    /// Moon–Sun elongation at sunrise, degrees.
    pub elongation: f64,
    /// Portion of the tithi elapsed at sunrise, percent.
    pub percent_complete: f64,
    #[serde(default)]
    pub ends_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nakshatra {
    /// 1–27.
    pub nakshatra: u8,
    pub name: String,
    /// 1–4.
    pub pada: u8,
    pub lord: String,
    pub deity: String,
    pub nature: String,
    /// Sidereal Moon longitude, degrees.
    pub moon_longitude: f64,
    #[serde(default)]
    pub ends_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yoga {
    /// 1–27.
    pub yoga: u8,
    pub name: String,
    pub nature: String,
    /// Sum of Sun and Moon sidereal longitudes, degrees.
    pub degree: f64,
    #[serde(default)]
    pub ends_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Karana {
    /// Position within the lunar month (1–60).
    pub karana: u8,
    pub name: String,
    pub nature: String,
    #[serde(default)]
    pub deity: Option<String>,
    #[serde(default)]
    pub ends_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vara {
    /// 1 = Sunday … 7 = Saturday.
    pub vara: u8,
    pub name: String,
    pub lord: String,
}

// ---------------------------------------------------------------------------
// Moon phase
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    /// Illuminated fraction of the disc, percent.
    pub illumination: f64,
    pub phase: String,
    pub is_waxing: bool,
    /// Days since the last new moon.
    pub age_days: f64,
}

// ---------------------------------------------------------------------------
// Hora
// ---------------------------------------------------------------------------

/// One planetary hour. A day carries exactly [`HORA_SLOTS`] of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoraSlot {
    pub hora: u8,
    pub planet: String,
    pub start: String,
    pub end: String,
    pub nature: String,
}

// ---------------------------------------------------------------------------
// Muhurta windows
// ---------------------------------------------------------------------------

/// A named window of local clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Local `HH:MM`.
    pub start: String,
    /// Local `HH:MM`.
    pub end: String,
    pub duration_minutes: f64,
}

/// Inauspicious and auspicious windows of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuhurtaWindows {
    pub rahu_kaal: TimeWindow,
    pub yamagandam: TimeWindow,
    pub gulika_kalam: TimeWindow,
    pub brahma_muhurta: TimeWindow,
    pub abhijit_muhurta: TimeWindow,
}

// ---------------------------------------------------------------------------
// Choghadiya
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choghadiya {
    pub day: Vec<ChoghadiyaSlot>,
    pub night: Vec<ChoghadiyaSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoghadiyaSlot {
    pub name: String,
    pub nature: String,
    pub start: String,
    pub end: String,
}

// ---------------------------------------------------------------------------
// Planets & annotations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: String,
    /// Sidereal longitude, `[0, 360)` degrees.
    pub longitude: f64,
    pub sign: String,
    #[serde(default)]
    pub is_retrograde: bool,
}

/// Festival or vrat observed on the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observance {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Special yoga formed by the day's vara and nakshatra/tithi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuhurtaYoga {
    pub name: String,
    pub nature: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}
