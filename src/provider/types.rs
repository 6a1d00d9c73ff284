//! Wire types for the OMDb-style metadata provider.

use serde::{Deserialize, Serialize};

/// One row of a search result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster_url: String,
}

/// Search response page as returned by the provider.
///
/// The provider signals "no matches" in-band: `response` is the string
/// `"False"` and `error` carries a human-readable message. That message is
/// surfaced to the caller verbatim.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchPage {
    #[serde(rename = "Search", default)]
    pub results: Vec<Movie>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchPage {
    pub fn is_ok(&self) -> bool {
        self.response == "True"
    }
}

/// Full record for a single title, fetched by IMDb id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Poster", default)]
    pub poster_url: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_page_decodes_results() {
        let body = r#"{
            "Search": [
                {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748",
                 "Type": "movie", "Poster": "https://img.example/alien.jpg"}
            ],
            "totalResults": "487",
            "Response": "True"
        }"#;

        let page: SearchPage = serde_json::from_str(body).unwrap();
        assert!(page.is_ok());
        assert_eq!(page.total_results.as_deref(), Some("487"));
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].imdb_id, "tt0078748");
        assert_eq!(page.results[0].title, "Alien");
        assert_eq!(page.results[0].year, "1979");
        assert_eq!(page.results[0].poster_url, "https://img.example/alien.jpg");
    }

    #[test]
    fn search_page_decodes_not_found() {
        let body = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let page: SearchPage = serde_json::from_str(body).unwrap();
        assert!(!page.is_ok());
        assert!(page.results.is_empty());
        assert_eq!(page.error.as_deref(), Some("Movie not found!"));
    }

    #[test]
    fn details_decode_tolerates_missing_optional_fields() {
        let body = r#"{
            "imdbID": "tt0078748",
            "Title": "Alien",
            "Year": "1979",
            "Runtime": "117 min",
            "imdbRating": "8.5",
            "Response": "True"
        }"#;

        let details: MovieDetails = serde_json::from_str(body).unwrap();
        assert_eq!(details.title, "Alien");
        assert_eq!(details.runtime, "117 min");
        assert_eq!(details.imdb_rating, "8.5");
        assert!(details.plot.is_empty());
        assert!(details.director.is_empty());
    }
}
