//! Error taxonomy for provider lookups.
//!
//! Cancellation is deliberately absent: a superseded lookup is aborted and
//! its completion discarded by the search controller, never surfaced here.

use thiserror::Error;

/// Errors surfaced by a movie lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a usable response (DNS, connect, I/O).
    #[error("Request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("Provider returned HTTP {status}")]
    BadStatus { status: u16 },

    /// The provider's in-band "no matches" signal.
    ///
    /// Carries the provider message verbatim (e.g. "Movie not found!").
    /// Treated as an error, not an empty success: the rendering layer shows
    /// the message instead of an empty list.
    #[error("{message}")]
    NoMatches { message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode provider response: {0}")]
    Decode(String),
}

impl LookupError {
    /// True for the provider's "no matches" convention.
    pub fn is_no_matches(&self) -> bool {
        matches!(self, LookupError::NoMatches { .. })
    }
}
