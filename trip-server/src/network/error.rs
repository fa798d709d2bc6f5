//! Network construction and loading error types.

use crate::domain::InvalidCityName;

/// Errors from building or loading a transport network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A city name failed validation
    #[error(transparent)]
    InvalidName(#[from] InvalidCityName),

    /// The same city was added twice (case-insensitive)
    #[error("duplicate city: {0}")]
    DuplicateCity(String),

    /// A link references a city not in the network
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// A link may not connect a city to itself
    #[error("link must connect two distinct cities: {0}")]
    SelfLink(String),

    /// The same pair of cities was linked twice
    #[error("duplicate link between {0} and {1}")]
    DuplicateLink(String, String),

    /// Reading a network file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing a network file failed
    #[error("failed to parse network file: {0}")]
    Json(#[from] serde_json::Error),
}
