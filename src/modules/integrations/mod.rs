pub mod omdb;
pub mod tmdb;

use reqwest::{Response, StatusCode};
use url::Url;

use crate::domain::{JsonObject, ProviderError};

pub use omdb::OmdbClient;
pub use tmdb::TmdbClient;

const USER_AGENT: &str = concat!("MovieRadar/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for both providers. No global timeout: only the
/// trending call sets one, per request.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

/// Parse a configured base URL, rejecting ones we cannot append segments to.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, url::ParseError> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
    }
    Ok(url)
}

/// `base` with each segment percent-encoded and appended to its path.
pub(crate) fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

pub(crate) fn transport_error(e: reqwest::Error) -> ProviderError {
    ProviderError::Transport(e.to_string())
}

/// Anything but 200 is an upstream error, other 2xx codes included.
pub(crate) fn ensure_ok(resp: &Response) -> Result<(), ProviderError> {
    if resp.status() != StatusCode::OK {
        return Err(ProviderError::Status(resp.status().as_u16()));
    }
    Ok(())
}

/// Read the whole body and decode it as a JSON object.
pub(crate) async fn read_json_object(resp: Response) -> Result<JsonObject, ProviderError> {
    let body = resp
        .bytes()
        .await
        .map_err(|e| ProviderError::Decode(format!("Failed to read response body: {}", e)))?;

    serde_json::from_slice::<JsonObject>(&body)
        .map_err(|e| ProviderError::Decode(format!("Failed to parse JSON: {}", e)))
}
