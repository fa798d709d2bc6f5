//! Travel class for route segments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Travel class offered on a route segment.
///
/// Each class carries a fixed price factor applied to the segment's base
/// cost and a comfort score on the 1-4 scale used for the aggregate rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComfortClass {
    Economy,
    Standard,
    Premium,
    Express,
}

impl ComfortClass {
    /// All classes, in ascending fare order.
    pub const ALL: [ComfortClass; 4] = [
        ComfortClass::Economy,
        ComfortClass::Standard,
        ComfortClass::Premium,
        ComfortClass::Express,
    ];

    /// Multiplier applied to a segment's base cost.
    pub fn price_factor(&self) -> f64 {
        match self {
            ComfortClass::Economy => 1.0,
            ComfortClass::Standard => 1.3,
            ComfortClass::Premium => 1.8,
            ComfortClass::Express => 1.5,
        }
    }

    /// Comfort score on the 1-4 scale (higher is more comfortable).
    pub fn score(&self) -> u8 {
        match self {
            ComfortClass::Economy => 1,
            ComfortClass::Standard => 2,
            ComfortClass::Premium => 4,
            ComfortClass::Express => 3,
        }
    }

    /// Short description of the travel experience.
    pub fn satisfaction(&self) -> &'static str {
        match self {
            ComfortClass::Economy => "Basic comfort",
            ComfortClass::Standard => "Comfortable journey",
            ComfortClass::Premium => "Luxury experience",
            ComfortClass::Express => "Fast service",
        }
    }

    /// The class name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ComfortClass::Economy => "Economy",
            ComfortClass::Standard => "Standard",
            ComfortClass::Premium => "Premium",
            ComfortClass::Express => "Express",
        }
    }
}

impl fmt::Display for ComfortClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
