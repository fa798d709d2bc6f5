//! Planned itineraries and their legs.

use super::error::DomainError;
use super::{CityName, ComfortClass, Priority, Traffic};

/// One leg of a multi-segment trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// City the leg departs from.
    pub start: CityName,

    /// City the leg arrives at.
    pub end: CityName,

    /// Travel class booked for this leg.
    pub comfort: ComfortClass,

    /// Fare for this leg, already adjusted for class and discounts
    /// and rounded to 2 decimal places.
    pub cost: f64,

    /// Duration in whole minutes, already adjusted for traffic.
    pub duration_mins: u32,

    /// Traffic condition sampled for this leg.
    pub traffic: Traffic,
}

/// A validated multi-leg trip between two cities.
///
/// Invariants, enforced at construction:
/// - at least one leg;
/// - every leg connects two distinct cities;
/// - consecutive legs chain (each leg starts where the previous one ended);
/// - no negative costs.
///
/// Totals are exact sums over the legs, so the response invariant
/// `total_cost == sum(segment costs)` holds without tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Build an itinerary from legs, validating the chain.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for leg in &legs {
            if leg.start == leg.end {
                return Err(DomainError::DegenerateLeg);
            }
            if leg.cost < 0.0 {
                return Err(DomainError::NegativeCost);
            }
        }

        for pair in legs.windows(2) {
            if pair[0].end != pair[1].start {
                return Err(DomainError::BrokenChain {
                    prev: pair[0].end.clone(),
                    next: pair[1].start.clone(),
                });
            }
        }

        Ok(Itinerary { legs })
    }

    /// The legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// The ordered cities visited, departure first. Always length >= 2.
    pub fn route(&self) -> Vec<CityName> {
        let mut cities = Vec::with_capacity(self.legs.len() + 1);
        cities.push(self.legs[0].start.clone());
        for leg in &self.legs {
            cities.push(leg.end.clone());
        }
        cities
    }

    /// City the trip departs from.
    pub fn departure(&self) -> &CityName {
        &self.legs[0].start
    }

    /// City the trip ends at.
    pub fn destination(&self) -> &CityName {
        &self.legs[self.legs.len() - 1].end
    }

    /// Total fare: exact sum of leg costs.
    pub fn total_cost(&self) -> f64 {
        self.legs.iter().map(|leg| leg.cost).sum()
    }

    /// Total travel time: exact sum of leg durations, in minutes.
    pub fn total_time_mins(&self) -> u32 {
        self.legs.iter().map(|leg| leg.duration_mins).sum()
    }

    /// Aggregate comfort rating: mean of leg comfort scores, rounded to
    /// 1 decimal place. Always within [1.0, 4.0].
    pub fn comfort_rating(&self) -> f64 {
        let total: u32 = self.legs.iter().map(|leg| u32::from(leg.comfort.score())).sum();
        let mean = f64::from(total) / self.legs.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}

/// Everything needed to request a plan: validated endpoints plus the
/// optimization priority.
#[derive(Debug, Clone)]
pub struct RouteQuery {
    /// City to depart from.
    pub departure: CityName,

    /// City to travel to.
    pub destination: CityName,

    /// Objective to optimize for.
    pub priority: Priority,
}

impl RouteQuery {
    /// Create a new route query.
    pub fn new(departure: CityName, destination: CityName, priority: Priority) -> Self {
        Self {
            departure,
            destination,
            priority,
        }
    }
}
