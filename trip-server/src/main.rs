use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trip_server::booking::BookingService;
use trip_server::cache::{CacheConfig, CachedPlanner};
use trip_server::network::{TransportNetwork, fully_connected};
use trip_server::planner::PlannerConfig;
use trip_server::web::{AppState, create_router};

/// Cities seeded when no network file is configured.
const SEED_CITIES: &[&str] = &[
    "Coimbatore",
    "Palakkad",
    "Chennai",
    "Bangalore",
    "Mumbai",
    "Delhi",
];

/// Default listen port; override with TRIP_PORT.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Build the network: an explicit file if configured, otherwise the
    // fully-connected seed network
    let network = match std::env::var("TRIP_NETWORK") {
        Ok(path) => {
            println!("Loading network from {path}...");
            TransportNetwork::from_file(&path).expect("Failed to load network file")
        }
        Err(_) => fully_connected(SEED_CITIES).expect("Failed to build seed network"),
    };
    println!("Loaded {} cities", network.len());

    let network = Arc::new(network);
    let planner = CachedPlanner::new(
        network.clone(),
        PlannerConfig::default(),
        &CacheConfig::default(),
    );

    let state = AppState::new(network, planner, BookingService::with_random_weather());
    let app = create_router(state);

    let port = std::env::var("TRIP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Trip Booking Service listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health      - Health check");
    println!("  GET  /api/cities  - List bookable cities");
    println!("  POST /api/book    - Book a trip");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
