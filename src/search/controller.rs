//! The fetch lifecycle: one live lookup per controller, stale results dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::provider::MovieLookup;
use crate::search::state::SearchState;

/// Minimum query length, in characters, before a lookup is issued. Shorter
/// queries resolve to [`SearchState::Idle`] without touching the network.
pub const MIN_QUERY_LEN: usize = 3;

/// Drives at most one in-flight lookup for the most recent query.
///
/// Every query change invalidates the previous attempt twice over: the
/// in-flight task is aborted, and the live generation is bumped so that a
/// completion racing the abort is discarded before it can touch state. The
/// generation check is required because the transport may not honor
/// cancellation promptly.
pub struct SearchController {
    lookup: Arc<dyn MovieLookup>,
    state: Arc<watch::Sender<SearchState>>,
    live_generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
    query: String,
}

impl SearchController {
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            lookup,
            state: Arc::new(state),
            live_generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
            query: String::new(),
        }
    }

    /// Subscribe to state transitions.
    ///
    /// The receiver always holds the latest state; intermediate states may
    /// be coalesced if the consumer is slow.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// The query as last set by the caller, unvalidated.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Record a query change and restart the lifecycle for it.
    ///
    /// Synchronous effects, in order: the previous attempt is invalidated,
    /// then the state moves to `Idle` (unqualified query) or `Loading`
    /// (lookup spawned). The spawned lookup settles asynchronously.
    pub fn set_query(&mut self, term: &str) {
        self.query = term.to_string();

        // Invalidate before issue: bumping the generation first makes any
        // still-settling attempt stale even if the abort lands too late.
        let generation = self.live_generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        if self.query.chars().count() < MIN_QUERY_LEN {
            tracing::debug!(query = %self.query, "Query below minimum length, idling");
            self.state.send_replace(SearchState::Idle);
            return;
        }

        self.state.send_replace(SearchState::Loading);

        let term = self.query.clone();
        let lookup = Arc::clone(&self.lookup);
        let state = Arc::clone(&self.state);
        let live = Arc::clone(&self.live_generation);

        self.in_flight = Some(tokio::spawn(async move {
            let outcome = lookup.search(&term).await;

            let next = match outcome {
                Ok(results) => {
                    tracing::debug!(%term, count = results.len(), "Lookup settled");
                    SearchState::Success { results }
                }
                Err(err) => {
                    tracing::warn!(%term, error = %err, "Lookup failed");
                    SearchState::Error {
                        message: err.to_string(),
                    }
                }
            };

            // A newer query may have superseded this attempt while the
            // request was settling; its result must never reach the state.
            // The generation check happens inside the watch write so it is
            // atomic with respect to set_query's bump-then-write order: a
            // completion cannot pass the check and then land after a newer
            // state has been published.
            let delivered = state.send_if_modified(|slot| {
                if live.load(Ordering::SeqCst) != generation {
                    return false;
                }
                *slot = next;
                true
            });
            if !delivered {
                tracing::debug!(%term, generation, "Discarded stale lookup result");
            }
        }));
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        // Teardown is a query change with no successor.
        self.live_generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
