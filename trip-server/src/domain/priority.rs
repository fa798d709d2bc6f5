//! Route optimization priority.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The objective the planner optimizes for.
///
/// Serialized lowercase on the wire (`"time"`, `"cost"`, `"comfort"`).
/// Booking requests that omit the field default to `Time`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Time,
    Cost,
    Comfort,
}

impl Priority {
    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Time => "time",
            Priority::Cost => "cost",
            Priority::Comfort => "comfort",
        }
    }
}

impl fmt::Display for Priority {
    /// Capitalized form for human-readable output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Time => "Time",
            Priority::Cost => "Cost",
            Priority::Comfort => "Comfort",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_time() {
        assert_eq!(Priority::default(), Priority::Time);
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Comfort).unwrap(), "\"comfort\"");

        let parsed: Priority = serde_json::from_str("\"cost\"").unwrap();
        assert_eq!(parsed, Priority::Cost);
    }

    #[test]
    fn serde_rejects_unknown() {
        let result: Result<Priority, _> = serde_json::from_str("\"speed\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_is_capitalized() {
        assert_eq!(format!("{}", Priority::Time), "Time");
        assert_eq!(format!("{}", Priority::Comfort), "Comfort");
    }
}
