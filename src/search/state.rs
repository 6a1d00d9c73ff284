//! Observable state of the search lifecycle.

use crate::provider::Movie;

/// State published by the search controller.
///
/// Transitions are owned exclusively by [`super::SearchController`];
/// consumers read snapshots and render them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// No qualifying query: empty, cleared, or below the minimum length.
    #[default]
    Idle,

    /// A lookup for the current query is in flight.
    Loading,

    /// The last qualifying lookup settled with results.
    Success { results: Vec<Movie> },

    /// The last qualifying lookup failed; the message is user-visible.
    Error { message: String },
}

impl SearchState {
    /// Check if a lookup is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the state is idle (no qualifying query).
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check if the state is a terminal outcome of a lookup.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Error { .. })
    }

    /// The current result set; empty unless in `Success`.
    pub fn results(&self) -> &[Movie] {
        match self {
            Self::Success { results } => results,
            _ => &[],
        }
    }

    /// The current error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}
