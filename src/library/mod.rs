//! Watched list: user ratings and the shared in-memory handle.

mod store;

pub use store::{LibraryError, LibraryStore};

use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::provider::Movie;

/// User star rating, 1 through 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// The number of stars, guaranteed in range.
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange { value })
        }
    }
}

/// Rejected rating value.
#[derive(Debug, Error)]
#[error("Rating {value} out of range (1..=10)")]
pub struct RatingOutOfRange {
    pub value: u8,
}

/// One rated entry in the watched list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    pub movie: Movie,
    pub rating: Rating,
    pub rated_at: SystemTime,
}

/// Aggregate view of the watched list.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryStats {
    pub count: usize,
    /// Mean user rating; `None` for an empty list.
    pub mean_rating: Option<f64>,
}

/// Clonable shared handle over the watched list.
///
/// Many readers, exclusive writers; persistence is the caller's concern via
/// [`LibraryStore`], so every mutation returns and the caller decides when
/// to save.
#[derive(Clone)]
pub struct Library {
    inner: Arc<RwLock<Vec<WatchedMovie>>>,
}

impl Library {
    pub fn new(entries: Vec<WatchedMovie>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(entries)),
        }
    }

    /// Rate a movie, inserting it or updating an existing entry in place.
    pub fn rate(&self, movie: Movie, rating: Rating) {
        let mut entries = self.inner.write();
        match entries.iter_mut().find(|e| e.movie.imdb_id == movie.imdb_id) {
            Some(entry) => {
                tracing::debug!(imdb_id = %movie.imdb_id, stars = rating.stars(), "Rating updated");
                entry.rating = rating;
                entry.rated_at = SystemTime::now();
            }
            None => {
                tracing::debug!(imdb_id = %movie.imdb_id, stars = rating.stars(), "Movie rated");
                entries.push(WatchedMovie {
                    movie,
                    rating,
                    rated_at: SystemTime::now(),
                });
            }
        }
    }

    /// Remove an entry by IMDb id. Returns whether anything was removed.
    pub fn remove(&self, imdb_id: &str) -> bool {
        let mut entries = self.inner.write();
        let before = entries.len();
        entries.retain(|e| e.movie.imdb_id != imdb_id);
        before != entries.len()
    }

    /// Check membership by IMDb id.
    pub fn contains(&self, imdb_id: &str) -> bool {
        self.inner.read().iter().any(|e| e.movie.imdb_id == imdb_id)
    }

    /// Snapshot of all entries, in insertion order.
    pub fn entries(&self) -> Vec<WatchedMovie> {
        self.inner.read().clone()
    }

    /// Count and mean rating.
    pub fn stats(&self) -> LibraryStats {
        let entries = self.inner.read();
        let count = entries.len();
        let mean_rating = if count == 0 {
            None
        } else {
            let total: u32 = entries.iter().map(|e| e.rating.stars() as u32).sum();
            Some(total as f64 / count as f64)
        };
        LibraryStats { count, mean_rating }
    }
}
