//! Application state containing the upstream providers

use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::domain::{MetadataProvider, RatingsProvider};
use crate::modules::integrations::{self, OmdbClient, TmdbClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Primary metadata provider (TMDB)
    pub metadata: Arc<dyn MetadataProvider>,
    /// Secondary ratings provider (OMDb)
    pub ratings: Arc<dyn RatingsProvider>,
}

impl AppState {
    pub fn new(metadata: Arc<dyn MetadataProvider>, ratings: Arc<dyn RatingsProvider>) -> Self {
        Self { metadata, ratings }
    }

    /// Build the HTTP-backed providers from configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let http = integrations::http_client().map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        let tmdb = TmdbClient::new(http.clone(), &config.tmdb_api_key, &config.tmdb_base_url)
            .map_err(|e| ConfigError::InvalidUrl("TMDB_BASE_URL", e.to_string()))?;
        let omdb = OmdbClient::new(http, &config.omdb_api_key, &config.omdb_base_url)
            .map_err(|e| ConfigError::InvalidUrl("OMDB_BASE_URL", e.to_string()))?;

        Ok(Self::new(Arc::new(tmdb), Arc::new(omdb)))
    }
}
