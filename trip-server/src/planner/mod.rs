//! Route planner.
//!
//! This module implements the core route planning algorithm: a best-first
//! search over the transport network, scored by the optimization priority
//! the traveller picked (time, cost, or comfort). Fares and durations are
//! adjusted for the travel conditions at booking time.

mod conditions;
mod config;
mod search;

pub use conditions::TravelConditions;
pub use config::PlannerConfig;
pub use search::{PlanError, Planner, RandomTraffic, TrafficModel};
