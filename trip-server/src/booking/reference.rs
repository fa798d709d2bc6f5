//! Booking reference generation and validation.

use std::fmt;

use rand::RngExt;
use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid booking reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking reference: {reason}")]
pub struct InvalidBookingRef {
    reason: &'static str,
}

/// An opaque booking reference: `BK` followed by five digits.
///
/// # Examples
///
/// ```
/// use trip_server::booking::BookingRef;
///
/// let reference = BookingRef::parse("BK12345").unwrap();
/// assert_eq!(reference.as_str(), "BK12345");
///
/// assert!(BookingRef::parse("12345").is_err());
/// assert!(BookingRef::parse("BK123").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingRef(String);

impl BookingRef {
    /// Generate a fresh random reference.
    pub fn generate() -> Self {
        let number: u32 = rand::rng().random_range(10_000..=99_999);
        BookingRef(format!("BK{number}"))
    }

    /// Parse a reference from a string.
    ///
    /// The input must be `BK` followed by exactly five digits, the first
    /// of which is non-zero.
    pub fn parse(s: &str) -> Result<Self, InvalidBookingRef> {
        let digits = s.strip_prefix("BK").ok_or(InvalidBookingRef {
            reason: "must start with BK",
        })?;

        if digits.len() != 5 {
            return Err(InvalidBookingRef {
                reason: "must have exactly five digits",
            });
        }

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidBookingRef {
                reason: "must be digits after the BK prefix",
            });
        }

        if digits.starts_with('0') {
            return Err(InvalidBookingRef {
                reason: "must not have a leading zero",
            });
        }

        Ok(BookingRef(s.to_string()))
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BookingRef {
    type Error = InvalidBookingRef;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BookingRef::parse(&s)
    }
}

impl From<BookingRef> for String {
    fn from(reference: BookingRef) -> Self {
        reference.0
    }
}

impl fmt::Display for BookingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
