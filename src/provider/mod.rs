//! Movie-metadata provider: wire types, errors, and the HTTP client.

mod client;
mod error;
mod types;

pub use client::{LookupFuture, MovieLookup, OmdbClient};
pub use error::LookupError;
pub use types::{Movie, MovieDetails};
