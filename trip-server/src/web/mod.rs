//! Web layer for the trip booking service.
//!
//! Provides the HTTP endpoints for listing cities and booking trips.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
