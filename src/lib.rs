//! Movie search and rating with a cancellation-safe fetch lifecycle.
//!
//! The heart of the crate is [`search::SearchController`]: it turns a stream
//! of query edits into at most one in-flight provider lookup and publishes a
//! [`search::SearchState`] observable that always reflects the most recent
//! qualifying query, no matter how request completions are ordered.
//!
//! Everything else is a collaborator: [`provider`] talks to the OMDb-style
//! metadata API, [`library`] keeps the persisted watched list, and [`render`]
//! turns observable state into terminal output.

pub mod args;
pub mod config;
pub mod library;
pub mod logging;
pub mod provider;
pub mod render;
pub mod search;
