use async_trait::async_trait;
use url::Url;

use super::{ensure_ok, parse_base_url, read_json_object, transport_error};
use crate::domain::{JsonObject, ProviderError, RatingsProvider};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb title lookup. A miss still comes back as 200 with
/// `{"Response":"False","Error":...}`, which is returned as-is.
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl OmdbClient {
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: parse_base_url(base_url)?,
        })
    }
}

#[async_trait]
impl RatingsProvider for OmdbClient {
    fn name(&self) -> &'static str {
        "omdb"
    }

    async fn lookup_by_title(
        &self,
        title: &str,
        year: Option<&str>,
    ) -> Result<JsonObject, ProviderError> {
        tracing::debug!(title = %title, year = ?year, "OMDb lookup");

        let mut params = vec![("apikey", self.api_key.as_str()), ("t", title)];
        if let Some(y) = year {
            params.push(("y", y));
        }

        let resp = self
            .http
            .get(self.base_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(transport_error)?;

        ensure_ok(&resp)?;
        read_json_object(resp).await
    }
}
