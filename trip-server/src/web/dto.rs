//! Data transfer objects for web requests and responses.
//!
//! These types define the wire shape of the booking API and are shared by
//! the server handlers and the booking client, so both sides of the
//! contract deserialize and serialize them.

use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::domain::{ComfortClass, Priority, Traffic};

/// Request to book a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookTripRequest {
    /// Departure city name
    pub departure: String,

    /// Destination city name
    pub destination: String,

    /// Optimization priority; defaults to time when omitted
    #[serde(default)]
    pub priority: Priority,
}

/// The journey request echoed back in a booking result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneySummary {
    /// Departure city, as requested
    pub departure: String,

    /// Destination city, as requested
    pub destination: String,

    /// Priority the route was optimized for
    pub priority: Priority,
}

/// One leg of the booked route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentResult {
    /// City the segment departs from
    pub start: String,

    /// City the segment arrives at
    pub end: String,

    /// Travel class for the segment
    pub comfort: ComfortClass,

    /// Segment fare
    pub cost: f64,

    /// Segment duration in minutes
    pub duration: u32,

    /// Traffic condition applied to the segment
    pub traffic: Traffic,
}

/// A confirmed booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResult {
    /// Opaque booking reference
    pub booking_ref: String,

    /// The request this booking answers
    pub journey: JourneySummary,

    /// Ordered cities visited, departure first
    pub route: Vec<String>,

    /// Ordered route segments
    pub segments: Vec<SegmentResult>,

    /// Total fare: sum of segment costs
    pub total_cost: f64,

    /// Total travel time in minutes: sum of segment durations
    pub total_time: u32,

    /// Aggregate comfort rating on the 0-4 star scale
    pub comfort_rating: f64,

    /// Advisory for the route, if any
    pub weather_warning: Option<String>,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl BookingResult {
    /// Build the wire form of a booking.
    pub fn from_booking(booking: &Booking) -> Self {
        let itinerary = &booking.itinerary;

        let segments = itinerary
            .legs()
            .iter()
            .map(|leg| SegmentResult {
                start: leg.start.as_str().to_string(),
                end: leg.end.as_str().to_string(),
                comfort: leg.comfort,
                cost: leg.cost,
                duration: leg.duration_mins,
                traffic: leg.traffic,
            })
            .collect();

        Self {
            booking_ref: booking.reference.as_str().to_string(),
            journey: JourneySummary {
                departure: booking.departure.as_str().to_string(),
                destination: booking.destination.as_str().to_string(),
                priority: booking.priority,
            },
            route: itinerary
                .route()
                .iter()
                .map(|city| city.as_str().to_string())
                .collect(),
            segments,
            total_cost: round2(itinerary.total_cost()),
            total_time: itinerary.total_time_mins(),
            comfort_rating: itinerary.comfort_rating(),
            weather_warning: booking.weather_warning.clone(),
        }
    }
}

/// Round to 2 decimal places (currency).
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
