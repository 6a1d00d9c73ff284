//! HTTP client for the OMDb-style provider.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;

use crate::config::{ConfigError, ProviderConfig, SecureString};
use crate::provider::error::LookupError;
use crate::provider::types::{Movie, MovieDetails, SearchPage};

/// Boxed future returned by [`MovieLookup::search`].
pub type LookupFuture = Pin<Box<dyn Future<Output = Result<Vec<Movie>, LookupError>> + Send>>;

/// A cancellable movie search backend.
///
/// The search controller only needs `search`; keeping it behind a trait lets
/// tests substitute a scripted lookup with controlled timing. The returned
/// future is cancelled by dropping it, so implementations must be drop-safe
/// at every await point.
pub trait MovieLookup: Send + Sync {
    fn search(&self, term: &str) -> LookupFuture;
}

/// Client for the OMDb-style metadata API.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: SecureString,
}

impl OmdbClient {
    /// Build a client from provider configuration.
    ///
    /// # Errors
    /// Returns an error if no API key can be resolved from the config or
    /// its named environment variable.
    pub fn new(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let api_key = config.resolve_api_key()?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .expect("Failed to build provider client");

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    /// Fetch the full record for one title by IMDb id.
    ///
    /// Issued as a plain one-shot call: detail fetches are user-initiated on
    /// a settled result and take no part in the search lifecycle.
    pub async fn details(&self, imdb_id: &str) -> Result<MovieDetails, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.expose()),
                ("i", imdb_id),
                ("plot", "short"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::BadStatus {
                status: status.as_u16(),
            });
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        // Unknown ids come back 200 with an in-band error envelope.
        if value.get("Response").and_then(|v| v.as_str()) == Some("False") {
            let message = value
                .get("Error")
                .and_then(|v| v.as_str())
                .unwrap_or("Incorrect IMDb ID.")
                .to_string();
            return Err(LookupError::NoMatches { message });
        }

        serde_json::from_value(value).map_err(|e| LookupError::Decode(e.to_string()))
    }
}

impl MovieLookup for OmdbClient {
    fn search(&self, term: &str) -> LookupFuture {
        let request = self.client.get(&self.base_url).query(&[
            ("apikey", self.api_key.expose()),
            ("s", term),
        ]);
        let term = term.to_string();

        Box::pin(async move {
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::BadStatus {
                    status: status.as_u16(),
                });
            }

            let page: SearchPage = response
                .json()
                .await
                .map_err(|e| LookupError::Decode(e.to_string()))?;

            if !page.is_ok() {
                let message = page
                    .error
                    .unwrap_or_else(|| "Movie not found!".to_string());
                return Err(LookupError::NoMatches { message });
            }

            tracing::debug!(
                %term,
                count = page.results.len(),
                total = ?page.total_results,
                "Search page received"
            );
            Ok(page.results)
        })
    }
}
