//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, Timelike};
use tracing::warn;

use crate::domain::{CityName, RouteQuery};
use crate::planner::{PlanError, TravelConditions};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/api/book", post(book_trip))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all bookable cities, in directory order.
async fn list_cities(State(state): State<AppState>) -> Json<Vec<String>> {
    let cities = state
        .network
        .city_names()
        .map(|city| city.as_str().to_string())
        .collect();

    Json(cities)
}

/// Book a trip between two cities.
async fn book_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BookingResult>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let request: BookTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid booking request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    // Validate before touching the planner
    let departure = CityName::parse(&request.departure).map_err(|_| AppError::BadRequest {
        message: "Both departure and destination cities must be provided".to_string(),
    })?;
    let destination = CityName::parse(&request.destination).map_err(|_| AppError::BadRequest {
        message: "Both departure and destination cities must be provided".to_string(),
    })?;

    if departure == destination {
        return Err(AppError::BadRequest {
            message: "Departure and destination cities cannot be the same".to_string(),
        });
    }

    // Get current time info
    let now = Local::now();
    let conditions = TravelConditions::at(now);
    let current_mins = (now.time().hour() * 60 + now.time().minute()) as u16;

    let query = RouteQuery::new(departure.clone(), destination.clone(), request.priority);
    let itinerary = state
        .planner
        .plan(&query, &conditions, current_mins)
        .await
        .map_err(AppError::from)?;

    let booking = state
        .booking
        .create(departure, destination, request.priority, itinerary);

    Ok(Json(BookingResult::from_booking(&booking)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::UnknownCity(_) | PlanError::SameCity => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::NoRouteFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            PlanError::Internal(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
