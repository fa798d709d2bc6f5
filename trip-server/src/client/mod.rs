//! Booking API client.
//!
//! A thin client over the two booking endpoints. Requests are validated
//! locally before any network call: empty or identical cities never reach
//! the server.

mod error;
mod render;
mod session;

use crate::domain::Priority;
use crate::web::{BookTripRequest, BookingResult, ErrorResponse};

pub use error::ClientError;
pub use render::{STAR_COUNT, Star, render_booking, render_stars, star_rating};
pub use session::{BookingSession, NOTICE_TTL};

use error::GENERIC_BOOKING_ERROR;

/// Configuration for the booking client.
#[derive(Debug, Clone)]
pub struct BookingClientConfig {
    /// Base URL of the booking service (e.g. `http://localhost:3000`)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BookingClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }
}

/// Client for the trip booking API.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingClient {
    /// Create a new booking client.
    pub fn new(config: BookingClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the city directory.
    pub async fn list_cities(&self) -> Result<Vec<String>, ClientError> {
        let url = format!("{}/api/cities", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: "Failed to fetch cities".to_string(),
            });
        }

        response.json().await.map_err(|e| ClientError::Json {
            message: e.to_string(),
        })
    }

    /// Book a trip.
    ///
    /// Validates the cities locally first; validation failures return
    /// without any network call. Non-2xx responses surface the server's
    /// `error` string verbatim, falling back to a generic message when the
    /// body carries none.
    pub async fn book(
        &self,
        departure: &str,
        destination: &str,
        priority: Priority,
    ) -> Result<BookingResult, ClientError> {
        validate_trip(departure, destination)?;

        let url = format!("{}/api/book", self.base_url);
        let request = BookTripRequest {
            departure: departure.trim().to_string(),
            destination: destination.trim().to_string(),
            priority,
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => GENERIC_BOOKING_ERROR.to_string(),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|e| ClientError::Json {
            message: e.to_string(),
        })
    }
}

/// Validate a departure/destination pair before any network call.
pub fn validate_trip(departure: &str, destination: &str) -> Result<(), ClientError> {
    let departure = departure.trim();
    let destination = destination.trim();

    if departure.is_empty() || destination.is_empty() {
        return Err(ClientError::Validation(
            "Please select both departure and destination cities".to_string(),
        ));
    }

    if departure.eq_ignore_ascii_case(destination) {
        return Err(ClientError::Validation(
            "Departure and destination cities cannot be the same".to_string(),
        ));
    }

    Ok(())
}
