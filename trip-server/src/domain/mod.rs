//! Domain types for the trip booking service.
//!
//! This module contains the core domain model types that represent
//! validated trip data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod city;
mod comfort;
mod error;
mod itinerary;
mod priority;
mod traffic;

pub use city::{CityName, InvalidCityName};
pub use comfort::ComfortClass;
pub use error::DomainError;
pub use itinerary::{Itinerary, Leg, RouteQuery};
pub use priority::Priority;
pub use traffic::Traffic;
