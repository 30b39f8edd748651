//! TMDB (The Movie Database) client.
//!
//! Implements [`MetadataProvider`] against the v3 API: multi-type search,
//! the weekly trending feed and per-item details with credits.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

use super::{ensure_ok, join_segments, parse_base_url, read_json_object, transport_error};
use crate::domain::{
    JsonObject, MetadataProvider, ProviderError, TrendingMediaType, UpstreamBody,
};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Only the trending call is bounded; everything else uses transport defaults.
pub const TRENDING_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
    trending_timeout: Duration,
}

impl TmdbClient {
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: parse_base_url(base_url)?,
            trending_timeout: TRENDING_TIMEOUT,
        })
    }

    /// Override the trending timeout (tests use a short one)
    pub fn with_trending_timeout(mut self, timeout: Duration) -> Self {
        self.trending_timeout = timeout;
        self
    }

    async fn get_object(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<JsonObject, ProviderError> {
        let url = join_segments(&self.base_url, segments);
        tracing::debug!(path = %url.path(), "TMDB request");

        let resp = self
            .http
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_ok(&resp)?;
        read_json_object(resp).await
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    async fn search_multi(&self, query: &str, page: u32) -> Result<JsonObject, ProviderError> {
        let page = page.to_string();
        self.get_object(
            &["search", "multi"],
            &[("query", query), ("page", page.as_str())],
        )
        .await
    }

    async fn trending(
        &self,
        media_type: TrendingMediaType,
    ) -> Result<UpstreamBody, ProviderError> {
        let url = join_segments(&self.base_url, &["trending", media_type.as_str(), "week"]);
        tracing::debug!(path = %url.path(), "TMDB trending request");

        let resp = self
            .http
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .timeout(self.trending_timeout)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_ok(&resp)?;

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = resp.bytes().await.map_err(transport_error)?;

        Ok(UpstreamBody {
            body: body.to_vec(),
            content_type,
        })
    }

    async fn details_with_credits(
        &self,
        media_type: &str,
        id: &str,
    ) -> Result<JsonObject, ProviderError> {
        self.get_object(&[media_type, id], &[("append_to_response", "credits")])
            .await
    }
}
