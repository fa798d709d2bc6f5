//! Traffic condition labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Traffic condition observed on a route segment.
///
/// Sampled per segment when a route is planned; the multiplier applied to
/// the segment duration depends on the travel conditions (see
/// `planner::PlannerConfig`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    Low,
    Moderate,
    High,
}

impl Traffic {
    /// All conditions a segment can be assigned.
    pub const ALL: [Traffic; 3] = [Traffic::Low, Traffic::Moderate, Traffic::High];

    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Traffic::Low => "low",
            Traffic::Moderate => "moderate",
            Traffic::High => "high",
        }
    }
}

impl fmt::Display for Traffic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Traffic::Moderate).unwrap(), "\"moderate\"");

        let parsed: Traffic = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Traffic::High);
    }

    #[test]
    fn display_matches_wire_form() {
        for traffic in Traffic::ALL {
            assert_eq!(format!("{traffic}"), traffic.as_str());
        }
    }
}
