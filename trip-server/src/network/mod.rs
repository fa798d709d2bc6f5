//! The city transport network.
//!
//! Cities form an insertion-ordered, duplicate-free directory; links between
//! them are symmetric and carry the travel class, base fare and base duration
//! the planner adjusts for conditions at booking time.

mod distances;
mod error;
mod generate;
mod load;

use std::collections::HashMap;

use crate::domain::{CityName, ComfortClass};

pub use distances::{FALLBACK_DISTANCE_KM, distance_km};
pub use error::NetworkError;
pub use generate::{COST_PER_KM, fully_connected, fully_connected_with};

/// A directed link out of a city.
///
/// Links are always stored in both directions, so a `Link` exists from each
/// endpoint to the other with identical attributes.
#[derive(Debug, Clone)]
pub struct Link {
    /// City this link leads to.
    pub to: CityName,

    /// Travel class available on this link.
    pub comfort: ComfortClass,

    /// Base fare before class factors and discounts.
    pub base_cost: f64,

    /// Base duration in minutes before traffic adjustment.
    pub base_duration_mins: f64,
}

/// A city and its outgoing links.
#[derive(Debug, Clone)]
struct CityEntry {
    name: CityName,
    links: Vec<Link>,
}

/// The transport network: a duplicate-free city directory plus symmetric
/// weighted links.
///
/// Cities keep their insertion order, which is the order the directory is
/// served in. All lookups are case-insensitive via [`CityName`] semantics.
#[derive(Debug, Clone, Default)]
pub struct TransportNetwork {
    cities: Vec<CityEntry>,
    index: HashMap<CityName, usize>,
}

impl TransportNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city to the directory.
    ///
    /// Rejects names already present (case-insensitive).
    pub fn add_city(&mut self, name: CityName) -> Result<(), NetworkError> {
        if self.index.contains_key(&name) {
            return Err(NetworkError::DuplicateCity(name.as_str().to_string()));
        }

        self.index.insert(name.clone(), self.cities.len());
        self.cities.push(CityEntry {
            name,
            links: Vec::new(),
        });
        Ok(())
    }

    /// Add a symmetric link between two existing cities.
    ///
    /// The link is stored in both directions. Linking a city to itself or
    /// linking the same pair twice is rejected.
    pub fn add_link(
        &mut self,
        start: &CityName,
        end: &CityName,
        comfort: ComfortClass,
        base_cost: f64,
        base_duration_mins: f64,
    ) -> Result<(), NetworkError> {
        if start == end {
            return Err(NetworkError::SelfLink(start.as_str().to_string()));
        }

        let start_idx = self
            .index
            .get(start)
            .copied()
            .ok_or_else(|| NetworkError::UnknownCity(start.as_str().to_string()))?;
        let end_idx = self
            .index
            .get(end)
            .copied()
            .ok_or_else(|| NetworkError::UnknownCity(end.as_str().to_string()))?;

        if self.cities[start_idx].links.iter().any(|l| &l.to == end) {
            return Err(NetworkError::DuplicateLink(
                start.as_str().to_string(),
                end.as_str().to_string(),
            ));
        }

        let start_name = self.cities[start_idx].name.clone();
        let end_name = self.cities[end_idx].name.clone();

        self.cities[start_idx].links.push(Link {
            to: end_name,
            comfort,
            base_cost,
            base_duration_mins,
        });
        self.cities[end_idx].links.push(Link {
            to: start_name,
            comfort,
            base_cost,
            base_duration_mins,
        });
        Ok(())
    }

    /// Whether a city is in the directory.
    pub fn contains(&self, name: &CityName) -> bool {
        self.index.contains_key(name)
    }

    /// City names in insertion order.
    pub fn city_names(&self) -> impl Iterator<Item = &CityName> {
        self.cities.iter().map(|entry| &entry.name)
    }

    /// Outgoing links from a city, or `None` if the city is unknown.
    pub fn links_from(&self, name: &CityName) -> Option<&[Link]> {
        self.index
            .get(name)
            .map(|&idx| self.cities[idx].links.as_slice())
    }

    /// Number of cities in the directory.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
