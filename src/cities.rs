//! Built-in table of major Indian cities.
//!
//! Each city carries the coordinates and timezone the upstream needs, so
//! callers can address a location by slug (e.g. `new-delhi`).

use crate::types::request::Location;

/// A city with a precomputed observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// URL-safe identifier.
    pub slug: &'static str,
    pub name: &'static str,
    pub state: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
}

impl City {
    /// The city's observer location.
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude, self.timezone)
    }
}

const IST: &str = "Asia/Kolkata";

macro_rules! city {
    ($slug:literal, $name:literal, $state:literal, $lat:literal, $lng:literal) => {
        City {
            slug: $slug,
            name: $name,
            state: $state,
            latitude: $lat,
            longitude: $lng,
            timezone: IST,
        }
    };
}

static CITIES: &[City] = &[
    city!("new-delhi", "New Delhi", "Delhi", 28.6139, 77.209),
    city!("mumbai", "Mumbai", "Maharashtra", 19.076, 72.8777),
    city!("bengaluru", "Bengaluru", "Karnataka", 12.9716, 77.5946),
    city!("chennai", "Chennai", "Tamil Nadu", 13.0827, 80.2707),
    city!("kolkata", "Kolkata", "West Bengal", 22.5726, 88.3639),
    city!("hyderabad", "Hyderabad", "Telangana", 17.385, 78.4867),
    city!("pune", "Pune", "Maharashtra", 18.5204, 73.8567),
    city!("ahmedabad", "Ahmedabad", "Gujarat", 23.0225, 72.5714),
    city!("surat", "Surat", "Gujarat", 21.1702, 72.8311),
    city!("jaipur", "Jaipur", "Rajasthan", 26.9124, 75.7873),
    city!("lucknow", "Lucknow", "Uttar Pradesh", 26.8467, 80.9462),
    city!("kanpur", "Kanpur", "Uttar Pradesh", 26.4499, 80.3319),
    city!("varanasi", "Varanasi", "Uttar Pradesh", 25.3176, 82.9739),
    city!("nagpur", "Nagpur", "Maharashtra", 21.1458, 79.0882),
    city!("indore", "Indore", "Madhya Pradesh", 22.7196, 75.8577),
    city!("bhopal", "Bhopal", "Madhya Pradesh", 23.2599, 77.4126),
    city!("ujjain", "Ujjain", "Madhya Pradesh", 23.1765, 75.7885),
    city!("patna", "Patna", "Bihar", 25.5941, 85.1376),
    city!("chandigarh", "Chandigarh", "Chandigarh", 30.7333, 76.7794),
    city!("haridwar", "Haridwar", "Uttarakhand", 29.9457, 78.1642),
];

/// Every known city.
pub fn all() -> &'static [City] {
    CITIES
}

/// Look up a city by slug, case-insensitively.
pub fn find(slug: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.slug.eq_ignore_ascii_case(slug.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_slug() {
        let delhi = find("New-Delhi").expect("delhi listed");
        assert_eq!(delhi.name, "New Delhi");
        assert_eq!(delhi.location(), Location::new(28.6139, 77.209, "Asia/Kolkata"));
        assert!(find("atlantis").is_none());
    }

    #[test]
    fn slugs_unique_and_locations_valid() {
        let mut slugs: Vec<_> = all().iter().map(|c| c.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), all().len());
        for city in all() {
            assert!(city.location().validate().is_ok(), "{}", city.slug);
        }
    }
}
