//! Network loading from a JSON file.
//!
//! Lets a deployment replace the generated seed network with an explicit
//! one. The file lists the city directory and the routes between them:
//!
//! ```json
//! {
//!   "cities": ["Delhi", "Mumbai"],
//!   "routes": [
//!     {"start": "Delhi", "end": "Mumbai", "comfort": "Standard",
//!      "cost": 21000.0, "duration": 1400.0}
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::domain::{CityName, ComfortClass};

use super::error::NetworkError;
use super::TransportNetwork;

/// On-disk network description.
#[derive(Debug, Deserialize)]
struct NetworkFile {
    cities: Vec<String>,
    routes: Vec<RouteDef>,
}

/// One route entry in a network file.
#[derive(Debug, Deserialize)]
struct RouteDef {
    start: String,
    end: String,
    comfort: ComfortClass,
    cost: f64,
    duration: f64,
}

impl TransportNetwork {
    /// Load a network from a JSON file.
    ///
    /// Duplicate cities, routes referencing unknown cities, and duplicate
    /// or self-referential routes are load errors.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path)?;
        let file: NetworkFile = serde_json::from_str(&json)?;

        let mut network = TransportNetwork::new();

        for name in &file.cities {
            network.add_city(CityName::parse(name)?)?;
        }

        for route in &file.routes {
            let start = CityName::parse(&route.start)?;
            let end = CityName::parse(&route.end)?;
            network.add_link(&start, &end, route.comfort, route.cost, route.duration)?;
        }

        Ok(network)
    }
}
