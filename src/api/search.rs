use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::envelope::{Envelope, enrich};
use super::error::ApiError;
use super::params::first_value;
use crate::domain::media;
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search text (movies, TV shows and people), required
    pub q: Option<String>,
    /// Result page, defaults to 1
    pub page: Option<String>, // parsed leniently, see `page_number`
}

impl SearchQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            q: first_value(raw, "q"),
            page: first_value(raw, "page"),
        }
    }
}

/// Positive integer pages only; anything else is page 1
fn page_number(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "TMDB results plus OMDb data for the first hit"),
        (status = 400, description = "Missing search query"),
        (status = 500, description = "TMDB response could not be decoded"),
        (status = 502, description = "TMDB could not be reached")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Envelope>, ApiError> {
    let params = SearchQuery::from_raw(raw.as_deref());
    let query = params
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingParameter("Missing search query"))?;
    let page = page_number(params.page.as_deref());

    let tmdb = state.metadata.search_multi(query, page).await?;

    let title = media::first_result(&tmdb).and_then(media::display_title);
    let omdb = enrich(state.ratings.as_ref(), title.as_deref(), None).await;

    Ok(Json(Envelope { tmdb, omdb }))
}
