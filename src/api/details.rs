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
pub struct DetailsQuery {
    /// TMDB media type, e.g. `movie` or `tv`, required
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    /// TMDB identifier, required
    pub id: Option<String>,
}

impl DetailsQuery {
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self {
            media_type: first_value(raw, "type"),
            id: first_value(raw, "id"),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/details",
    params(DetailsQuery),
    responses(
        (status = 200, description = "TMDB details with credits plus OMDb data"),
        (status = 400, description = "Missing type or id"),
        (status = 500, description = "TMDB response could not be decoded"),
        (status = 502, description = "TMDB could not be reached")
    )
)]
pub async fn details(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Envelope>, ApiError> {
    let params = DetailsQuery::from_raw(raw.as_deref());
    let (Some(media_type), Some(id)) = (
        params.media_type.as_deref().filter(|t| !t.is_empty()),
        params.id.as_deref().filter(|i| !i.is_empty()),
    ) else {
        return Err(ApiError::MissingParameter("Missing type or id"));
    };

    let tmdb = state.metadata.details_with_credits(media_type, id).await?;

    let title = media::display_title(&tmdb);
    let year = media::release_year(&tmdb);
    let omdb = enrich(state.ratings.as_ref(), title.as_deref(), year.as_deref()).await;

    Ok(Json(Envelope { tmdb, omdb }))
}
