//! Planner configuration.

use crate::domain::{ComfortClass, Traffic};

use super::conditions::TravelConditions;

/// Configuration parameters for route planning.
///
/// Traffic factors multiply a link's base duration; the applicable factor
/// depends on the sampled condition and on when the trip is booked.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Cost multiplier applied on weekends.
    pub weekend_discount: f64,

    /// Weight of the (inverted) comfort score under the comfort priority.
    pub comfort_weight: f64,

    /// Weight of the adjusted duration under the comfort priority.
    pub comfort_time_weight: f64,

    /// Comfort scores are inverted against this ceiling so that more
    /// comfortable legs score lower.
    pub max_comfort_score: f64,

    /// Duration factor for low traffic on weekdays.
    pub traffic_low: f64,

    /// Duration factor for low traffic on weekends.
    pub traffic_low_weekend: f64,

    /// Duration factor for moderate traffic on weekdays.
    pub traffic_moderate: f64,

    /// Duration factor for moderate traffic on weekends.
    pub traffic_moderate_weekend: f64,

    /// Duration factor for high traffic outside rush hour.
    pub traffic_high: f64,

    /// Duration factor for high traffic during rush hour.
    pub traffic_high_rush: f64,
}

impl PlannerConfig {
    /// Duration factor for a sampled traffic condition under the given
    /// conditions.
    pub fn traffic_factor(&self, traffic: Traffic, conditions: &TravelConditions) -> f64 {
        match traffic {
            Traffic::Low => {
                if conditions.weekend {
                    self.traffic_low_weekend
                } else {
                    self.traffic_low
                }
            }
            Traffic::Moderate => {
                if conditions.weekend {
                    self.traffic_moderate_weekend
                } else {
                    self.traffic_moderate
                }
            }
            Traffic::High => {
                if conditions.rush_hour {
                    self.traffic_high_rush
                } else {
                    self.traffic_high
                }
            }
        }
    }

    /// Cost multiplier for the given conditions.
    pub fn cost_discount(&self, conditions: &TravelConditions) -> f64 {
        if conditions.weekend {
            self.weekend_discount
        } else {
            1.0
        }
    }

    /// The comfort score inverted against the ceiling, so lower is better.
    pub fn inverted_comfort(&self, comfort: ComfortClass) -> f64 {
        self.max_comfort_score - f64::from(comfort.score())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            weekend_discount: 0.9,
            comfort_weight: 0.8,
            comfort_time_weight: 0.2,
            max_comfort_score: 5.0,
            traffic_low: 0.8,
            traffic_low_weekend: 0.9,
            traffic_moderate: 1.0,
            traffic_moderate_weekend: 1.1,
            traffic_high: 1.3,
            traffic_high_rush: 1.6,
        }
    }
}
