//! Plain-text rendering of observable state.
//!
//! Pure functions of state to strings: rendering takes no action on the
//! controller or the library.

use crate::library::{LibraryStats, WatchedMovie};
use crate::provider::MovieDetails;
use crate::search::{SearchState, MIN_QUERY_LEN};

/// Render the current search state.
pub fn render_state(state: &SearchState) -> String {
    match state {
        SearchState::Idle => {
            format!("Type at least {MIN_QUERY_LEN} characters to search.")
        }
        SearchState::Loading => "Searching...".to_string(),
        SearchState::Error { message } => format!("Search failed: {message}"),
        SearchState::Success { results } => {
            let mut out = format!("{} result(s):\n", results.len());
            for (index, movie) in results.iter().enumerate() {
                out.push_str(&format!(
                    "{:>3}. {} ({})  [{}]\n",
                    index + 1,
                    movie.title,
                    movie.year,
                    movie.imdb_id
                ));
            }
            out
        }
    }
}

/// Render the watched list with its aggregate stats.
pub fn render_watched(entries: &[WatchedMovie], stats: &LibraryStats) -> String {
    if entries.is_empty() {
        return "Watched list is empty.".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{} ({})  {}/10  [{}]\n",
            entry.movie.title,
            entry.movie.year,
            entry.rating.stars(),
            entry.movie.imdb_id
        ));
    }
    let mean = stats.mean_rating.unwrap_or(0.0);
    out.push_str(&format!("{} movie(s) watched, mean rating {:.1}", stats.count, mean));
    out
}

/// Render the detail record for one title.
pub fn render_details(details: &MovieDetails) -> String {
    let mut out = format!("{} ({})\n", details.title, details.year);
    for (label, value) in [
        ("Released", &details.released),
        ("Runtime", &details.runtime),
        ("Genre", &details.genre),
        ("Director", &details.director),
        ("Actors", &details.actors),
        ("IMDb rating", &details.imdb_rating),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("  {label}: {value}\n"));
        }
    }
    if !details.plot.is_empty() {
        out.push_str(&format!("\n{}\n", details.plot));
    }
    out
}
