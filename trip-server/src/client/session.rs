//! Booking session state.
//!
//! An explicit application context for a booking form: the loaded city
//! directory, the last booking, and a transient notice that stands in for
//! the auto-dismissing inline message. Constructed once at startup and
//! passed to handlers, so the flow is testable without any UI.

use std::time::{Duration, Instant};

use crate::domain::Priority;
use crate::web::BookingResult;

use super::BookingClient;
use super::error::CITIES_UNAVAILABLE;

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// A transient user-facing message.
#[derive(Debug, Clone)]
struct Notice {
    message: String,
    posted_at: Instant,
}

/// State for one booking form session.
pub struct BookingSession {
    client: BookingClient,
    cities: Vec<String>,
    last_booking: Option<BookingResult>,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl BookingSession {
    /// Create a session over the given client.
    pub fn new(client: BookingClient) -> Self {
        Self {
            client,
            cities: Vec::new(),
            last_booking: None,
            notice: None,
            notice_ttl: NOTICE_TTL,
        }
    }

    /// Override the notice TTL (for tests).
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// Load the city directory.
    ///
    /// On failure, the directory stays empty and a notice is posted; the
    /// session remains usable.
    pub async fn load_cities(&mut self) -> &[String] {
        match self.client.list_cities().await {
            Ok(cities) => self.cities = cities,
            Err(_) => self.post_notice(CITIES_UNAVAILABLE.to_string()),
        }
        &self.cities
    }

    /// Submit a booking request.
    ///
    /// On success the booking is kept until [`reset`](Self::reset); on
    /// failure a notice with the user-facing message is posted.
    pub async fn submit(
        &mut self,
        departure: &str,
        destination: &str,
        priority: Priority,
    ) -> Option<&BookingResult> {
        self.notice = None;

        match self.client.book(departure, destination, priority).await {
            Ok(booking) => {
                self.last_booking = Some(booking);
                self.last_booking.as_ref()
            }
            Err(error) => {
                self.post_notice(error.user_message());
                None
            }
        }
    }

    /// Discard the last booking and any notice.
    pub fn reset(&mut self) {
        self.last_booking = None;
        self.notice = None;
    }

    /// The loaded city directory.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// The last successful booking, if any.
    pub fn last_booking(&self) -> Option<&BookingResult> {
        self.last_booking.as_ref()
    }

    /// The current notice, unless it has expired.
    pub fn notice(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| notice.posted_at.elapsed() < self.notice_ttl)
            .map(|notice| notice.message.as_str())
    }

    fn post_notice(&mut self, message: String) {
        self.notice = Some(Notice {
            message,
            posted_at: Instant::now(),
        });
    }
}
