//! Weather advisories for planned routes.

use rand::RngExt;

use crate::domain::CityName;

/// Conditions a warning can mention.
pub const WEATHER_CONDITIONS: [&str; 4] = ["rain", "fog", "snow", "high winds"];

/// Produces an optional weather warning for a route.
///
/// This abstraction keeps booking output deterministic under test.
pub trait WeatherAdvisor {
    /// An advisory for the route, or `None` when conditions are clear.
    fn advise(&self, route: &[CityName]) -> Option<String>;
}

/// Production advisor: warns with a fixed probability about a random
/// condition.
#[derive(Debug, Clone)]
pub struct RandomWeather {
    /// Probability that a booking carries a warning.
    pub probability: f64,
}

impl Default for RandomWeather {
    fn default() -> Self {
        Self { probability: 0.3 }
    }
}

impl WeatherAdvisor for RandomWeather {
    fn advise(&self, _route: &[CityName]) -> Option<String> {
        let mut rng = rand::rng();

        if !rng.random_bool(self.probability) {
            return None;
        }

        let condition = WEATHER_CONDITIONS[rng.random_range(0..WEATHER_CONDITIONS.len())];
        Some(format!("Expect {condition} along parts of this route."))
    }
}
