//! Booking creation.
//!
//! A booking wraps a planned itinerary with a fresh reference, the
//! traveller's original request (echoed back as given), and an optional
//! weather advisory. Bookings live only for the response; nothing is
//! persisted.

mod reference;
mod weather;

use std::sync::Arc;

use crate::domain::{CityName, Itinerary, Priority};

pub use reference::{BookingRef, InvalidBookingRef};
pub use weather::{RandomWeather, WeatherAdvisor, WEATHER_CONDITIONS};

/// A confirmed booking.
#[derive(Debug, Clone)]
pub struct Booking {
    /// Opaque reference for this booking.
    pub reference: BookingRef,

    /// Departure city as the traveller spelled it.
    pub departure: CityName,

    /// Destination city as the traveller spelled it.
    pub destination: CityName,

    /// Priority the route was optimized for.
    pub priority: Priority,

    /// The planned route.
    pub itinerary: Arc<Itinerary>,

    /// Advisory for the route, if any.
    pub weather_warning: Option<String>,
}

/// Creates bookings from planned itineraries.
pub struct BookingService {
    advisor: Arc<dyn WeatherAdvisor + Send + Sync>,
}

impl BookingService {
    /// Create a service with the given weather advisor.
    pub fn new(advisor: Arc<dyn WeatherAdvisor + Send + Sync>) -> Self {
        Self { advisor }
    }

    /// Create a service with the production random advisor.
    pub fn with_random_weather() -> Self {
        Self::new(Arc::new(RandomWeather::default()))
    }

    /// Confirm a booking for a planned itinerary.
    pub fn create(
        &self,
        departure: CityName,
        destination: CityName,
        priority: Priority,
        itinerary: Arc<Itinerary>,
    ) -> Booking {
        let weather_warning = self.advisor.advise(&itinerary.route());

        Booking {
            reference: BookingRef::generate(),
            departure,
            destination,
            priority,
            itinerary,
            weather_warning,
        }
    }
}
