//! City name identifier.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city name: {reason}")]
pub struct InvalidCityName {
    reason: &'static str,
}

/// A validated city name.
///
/// City names are non-empty after trimming. Equality and hashing are
/// case-insensitive (ASCII), so `"delhi"` and `"Delhi"` identify the same
/// city; the spelling given at construction is preserved for display.
///
/// # Examples
///
/// ```
/// use trip_server::domain::CityName;
///
/// let delhi = CityName::parse("Delhi").unwrap();
/// assert_eq!(delhi.as_str(), "Delhi");
/// assert_eq!(delhi, CityName::parse("delhi").unwrap());
///
/// // Whitespace-only names are rejected
/// assert!(CityName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Parse a city name from a string.
    ///
    /// Leading and trailing whitespace is stripped; the result must be
    /// non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidCityName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidCityName {
                reason: "must not be empty",
            });
        }

        Ok(CityName(trimmed.to_string()))
    }

    /// Returns the city name as a string slice, in its original spelling.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase form used as a lookup/cache key.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl PartialEq for CityName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for CityName {}

impl Hash for CityName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0.len());
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl TryFrom<String> for CityName {
    type Error = InvalidCityName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        CityName::parse(&s)
    }
}

impl From<CityName> for String {
    fn from(city: CityName) -> Self {
        city.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
