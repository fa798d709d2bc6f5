//! Booking client error types.

/// Fallback message when a booking failure carries no server error text.
pub(super) const GENERIC_BOOKING_ERROR: &str = "Failed to book trip. Please try again.";

/// Message shown when the city directory cannot be loaded.
pub(super) const CITIES_UNAVAILABLE: &str =
    "Unable to load cities. Please refresh the page and try again.";

/// Errors from the booking client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input rejected locally; no network call was made
    #[error("{0}")]
    Validation(String),

    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A response body could not be parsed
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

impl ClientError {
    /// Whether this failure was caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// The message a user should see for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation(message) => message.clone(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Http(_) | ClientError::Json { .. } => GENERIC_BOOKING_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_flagged() {
        let err = ClientError::Validation("nope".to_string());
        assert!(err.is_validation());

        let err = ClientError::Api {
            status: 404,
            message: "no route".to_string(),
        };
        assert!(!err.is_validation());
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ClientError::Api {
            status: 404,
            message: "No route available from Delhi to Mumbai".to_string(),
        };
        assert_eq!(err.user_message(), "No route available from Delhi to Mumbai");

        let err = ClientError::Json {
            message: "expected value".to_string(),
        };
        assert_eq!(err.user_message(), GENERIC_BOOKING_ERROR);
    }
}
