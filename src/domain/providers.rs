//! Provider trait definitions
//!
//! These traits define what the handlers need from the two upstream APIs.
//! HTTP implementations live in `modules::integrations`.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;

use super::ProviderError;

/// A decoded JSON object as returned by a provider
pub type JsonObject = Map<String, Value>;

/// Media filter for the weekly trending feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingMediaType {
    Movie,
    Tv,
    #[default]
    All,
}

impl TrendingMediaType {
    /// Anything other than exactly `movie` or `tv` (absent included) maps to `All`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("movie") => TrendingMediaType::Movie,
            Some("tv") => TrendingMediaType::Tv,
            _ => TrendingMediaType::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingMediaType::Movie => "movie",
            TrendingMediaType::Tv => "tv",
            TrendingMediaType::All => "all",
        }
    }
}

impl fmt::Display for TrendingMediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw upstream response kept byte-for-byte for passthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamBody {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// Primary metadata provider (search, trending, details)
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short identifier reported by the health endpoint
    fn name(&self) -> &'static str;

    /// Multi-type search over movies, TV shows and people
    async fn search_multi(&self, query: &str, page: u32) -> Result<JsonObject, ProviderError>;

    /// Weekly trending feed, returned undecoded
    async fn trending(
        &self,
        media_type: TrendingMediaType,
    ) -> Result<UpstreamBody, ProviderError>;

    /// Details for `{media_type}/{id}` with credits appended
    async fn details_with_credits(
        &self,
        media_type: &str,
        id: &str,
    ) -> Result<JsonObject, ProviderError>;
}

/// Secondary ratings provider (lookup by title)
#[async_trait]
pub trait RatingsProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Look up a single title, optionally narrowed to a release year
    async fn lookup_by_title(
        &self,
        title: &str,
        year: Option<&str>,
    ) -> Result<JsonObject, ProviderError>;
}
