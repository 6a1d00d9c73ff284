//! Query-driven search lifecycle.
//!
//! A query edit flows through exactly one path:
//!
//! ```text
//! set_query ──→ invalidate previous attempt ──→ qualify ──→ spawn lookup
//!                                                  │              │
//!                                                  └─→ Idle       └─→ Loading ─→ Success | Error
//! ```
//!
//! - [`SearchState`] is the observable consumed by rendering.
//! - [`SearchController`] owns all transitions; consumers only read.

mod controller;
mod state;

pub use controller::{SearchController, MIN_QUERY_LEN};
pub use state::SearchState;
