//! Error types for notedown-core

use thiserror::Error;

/// Result type alias using notedown-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notedown-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The note service asked us to back off; wait before retrying
    #[error("Note service rate limit hit, please wait approximately {minutes} minute(s)")]
    RateLimited {
        /// Requested wait, rounded up to whole minutes
        minutes: u64,
    },

    /// Operation requires state the session does not have
    #[error("Fetcher is not ready: {0}")]
    NotReady(String),

    /// Sync counters are equal; there is nothing to export
    #[error("Sync state is unchanged, nothing to export")]
    NoChange,

    /// The note service reported no notebooks at all
    #[error("The note service returned no notebooks")]
    EmptyNotebookSet,

    /// Name lookup miss
    #[error("Notebook not found: {0}")]
    NotFound(String),

    /// Underlying HTTP failure talking to the note service
    #[error("Note service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response from the note service
    #[error("Note service API error: {0}")]
    Api(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convert a rate-limit wait in seconds to whole minutes, rounding up.
#[must_use]
pub fn rate_limit_wait_minutes(seconds: u64) -> u64 {
    seconds.div_ceil(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_wait_rounds_up_to_whole_minutes() {
        assert_eq!(rate_limit_wait_minutes(125), 3);
        assert_eq!(rate_limit_wait_minutes(120), 2);
        assert_eq!(rate_limit_wait_minutes(1), 1);
        assert_eq!(rate_limit_wait_minutes(0), 0);
    }

    #[test]
    fn rate_limited_message_carries_minutes() {
        let error = Error::RateLimited { minutes: 3 };
        assert!(error.to_string().contains("3 minute(s)"));
    }
}
