use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::error::ApiError;
use super::params::first_value;
use crate::domain::TrendingMediaType;
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendingQuery {
    /// `movie` or `tv`; anything else means all
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

impl TrendingQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            media_type: first_value(raw, "type"),
        }
    }
}

/// Weekly trending feed. The upstream body is forwarded byte-for-byte.
#[utoipa::path(
    get,
    path = "/api/trending",
    params(TrendingQuery),
    responses(
        (status = 200, description = "TMDB weekly trending feed, unmodified"),
        (status = 502, description = "TMDB could not be reached or timed out")
    )
)]
pub async fn trending(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Response, ApiError> {
    let params = TrendingQuery::from_raw(raw.as_deref());
    let media_type = TrendingMediaType::from_param(params.media_type.as_deref());

    let upstream = state.metadata.trending(media_type).await?;
    let content_type = upstream
        .content_type
        .unwrap_or_else(|| "application/json".to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], upstream.body).into_response())
}
