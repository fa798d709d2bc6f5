//! Application state for the web layer.

use std::sync::Arc;

use crate::booking::BookingService;
use crate::cache::CachedPlanner;
use crate::network::TransportNetwork;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The city transport network
    pub network: Arc<TransportNetwork>,

    /// Route planner with its plan cache
    pub planner: Arc<CachedPlanner>,

    /// Booking creation service
    pub booking: Arc<BookingService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: Arc<TransportNetwork>,
        planner: CachedPlanner,
        booking: BookingService,
    ) -> Self {
        Self {
            network,
            planner: Arc::new(planner),
            booking: Arc::new(booking),
        }
    }
}
