//! Fully-connected network generation.
//!
//! Seeds a network where every city links to every other city, with fares
//! and durations derived from road distance.

use rand::RngExt;

use crate::domain::{CityName, ComfortClass};

use super::distances::distance_km;
use super::error::NetworkError;
use super::TransportNetwork;

/// Fare per kilometre, in rupees.
pub const COST_PER_KM: f64 = 15.0;

/// Build a fully-connected network over the given cities.
///
/// Every unordered pair is linked once; `base_cost` is distance x
/// [`COST_PER_KM`] and `base_duration_mins` assumes roughly one minute per
/// kilometre. The travel class for each pair comes from `choose_comfort`.
pub fn fully_connected_with<F>(
    city_names: &[&str],
    mut choose_comfort: F,
) -> Result<TransportNetwork, NetworkError>
where
    F: FnMut(&CityName, &CityName) -> ComfortClass,
{
    let mut network = TransportNetwork::new();

    let cities: Vec<CityName> = city_names
        .iter()
        .map(|name| CityName::parse(name))
        .collect::<Result<_, _>>()?;

    for city in &cities {
        network.add_city(city.clone())?;
    }

    for (i, start) in cities.iter().enumerate() {
        for end in &cities[i + 1..] {
            let km = distance_km(start, end);
            let comfort = choose_comfort(start, end);
            network.add_link(start, end, comfort, km * COST_PER_KM, km)?;
        }
    }

    Ok(network)
}

/// Build a fully-connected network with a random travel class per pair.
pub fn fully_connected(city_names: &[&str]) -> Result<TransportNetwork, NetworkError> {
    let mut rng = rand::rng();
    fully_connected_with(city_names, |_, _| {
        ComfortClass::ALL[rng.random_range(0..ComfortClass::ALL.len())]
    })
}
