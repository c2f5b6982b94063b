//! Travel-time lookup error types.

/// Errors that can occur when looking up a walking time.
///
/// These never reach the scoring code: the oracle degrades them to
/// [`FALLBACK_MINUTES`](super::FALLBACK_MINUTES).
#[derive(Debug, thiserror::Error)]
pub enum TravelError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Directions API returned a non-OK status
    #[error("directions API error {status}: {message}")]
    Api { status: String, message: String },

    /// No walking route between the two locations
    #[error("no route from {from:?} to {to:?}")]
    NoRoute { from: String, to: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
