//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reelfind::provider::{LookupError, LookupFuture, Movie, MovieLookup};

/// Scripted outcome for one search term.
#[derive(Clone)]
pub enum Scripted {
    Results { movies: Vec<Movie>, delay: Duration },
    NoMatches { message: String, delay: Duration },
    BadStatus { status: u16, delay: Duration },
}

/// Mock lookup answering each term from a script.
///
/// Calls are recorded when the returned future is first polled, so an
/// attempt aborted before it ran does not count as an issued request.
pub struct ScriptedLookup {
    script: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedLookup {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn respond(&self, term: &str, movies: Vec<Movie>, delay: Duration) {
        self.script
            .lock()
            .insert(term.to_string(), Scripted::Results { movies, delay });
    }

    pub fn fail(&self, term: &str, message: &str, delay: Duration) {
        self.script.lock().insert(
            term.to_string(),
            Scripted::NoMatches {
                message: message.to_string(),
                delay,
            },
        );
    }

    pub fn fail_status(&self, term: &str, status: u16, delay: Duration) {
        self.script
            .lock()
            .insert(term.to_string(), Scripted::BadStatus { status, delay });
    }

    /// Terms whose lookup actually started, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl MovieLookup for ScriptedLookup {
    fn search(&self, term: &str) -> LookupFuture {
        self.calls.lock().push(term.to_string());
        let scripted = self.script.lock().get(term).cloned();
        Box::pin(async move {
            match scripted {
                Some(Scripted::Results { movies, delay }) => {
                    tokio::time::sleep(delay).await;
                    Ok(movies)
                }
                Some(Scripted::NoMatches { message, delay }) => {
                    tokio::time::sleep(delay).await;
                    Err(LookupError::NoMatches { message })
                }
                Some(Scripted::BadStatus { status, delay }) => {
                    tokio::time::sleep(delay).await;
                    Err(LookupError::BadStatus { status })
                }
                None => Err(LookupError::Decode("unscripted term".to_string())),
            }
        })
    }
}

/// Build a search result row for assertions.
pub fn movie(id: &str, title: &str, year: &str) -> Movie {
    Movie {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster_url: format!("https://img.example/{id}.jpg"),
    }
}
