//! Road distances between the seed cities.

use crate::domain::CityName;

/// Approximate road distances (km) between the seeded cities.
const SEED_DISTANCES_KM: &[(&str, &str, f64)] = &[
    ("Coimbatore", "Palakkad", 40.0),
    ("Coimbatore", "Chennai", 500.0),
    ("Coimbatore", "Bangalore", 330.0),
    ("Coimbatore", "Mumbai", 1200.0),
    ("Coimbatore", "Delhi", 2200.0),
    ("Palakkad", "Chennai", 530.0),
    ("Palakkad", "Bangalore", 370.0),
    ("Palakkad", "Mumbai", 1240.0),
    ("Palakkad", "Delhi", 2240.0),
    ("Chennai", "Bangalore", 350.0),
    ("Chennai", "Mumbai", 1350.0),
    ("Chennai", "Delhi", 2180.0),
    ("Bangalore", "Mumbai", 980.0),
    ("Bangalore", "Delhi", 2150.0),
    ("Mumbai", "Delhi", 1400.0),
];

/// Distance assumed for pairs not in the table.
pub const FALLBACK_DISTANCE_KM: f64 = 500.0;

/// Road distance in km between two cities.
///
/// The lookup is symmetric and case-insensitive. Identical cities are 0 km
/// apart; unknown pairs fall back to [`FALLBACK_DISTANCE_KM`].
pub fn distance_km(a: &CityName, b: &CityName) -> f64 {
    if a == b {
        return 0.0;
    }

    for &(from, to, km) in SEED_DISTANCES_KM {
        let forward = a.as_str().eq_ignore_ascii_case(from) && b.as_str().eq_ignore_ascii_case(to);
        let reverse = a.as_str().eq_ignore_ascii_case(to) && b.as_str().eq_ignore_ascii_case(from);
        if forward || reverse {
            return km;
        }
    }

    FALLBACK_DISTANCE_KM
}
