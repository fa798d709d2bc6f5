//! Domain error types.
//!
//! These errors represent validation failures in the domain layer,
//! distinct from planner and web errors.

use super::CityName;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A leg's cost must not be negative
    #[error("leg cost must be non-negative")]
    NegativeCost,

    /// A leg must connect two distinct cities
    #[error("leg start and end must differ")]
    DegenerateLeg,

    /// An itinerary needs at least one leg
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs must chain end-to-start
    #[error("legs do not chain: {prev} does not connect to {next}")]
    BrokenChain { prev: CityName, next: CityName },
}
