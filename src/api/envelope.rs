use serde::Serialize;

use crate::domain::{JsonObject, RatingsProvider};

/// Response body for search and details: the TMDB object next to its OMDb
/// enrichment. Both keys are always present; `omdb` is `{}` when enrichment
/// was skipped or failed.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub tmdb: JsonObject,
    pub omdb: JsonObject,
}

/// Best-effort OMDb lookup. Never fails: a missing title or any provider
/// error yields an empty object.
pub async fn enrich(
    ratings: &dyn RatingsProvider,
    title: Option<&str>,
    year: Option<&str>,
) -> JsonObject {
    let Some(title) = title else {
        return JsonObject::new();
    };

    match ratings.lookup_by_title(title, year).await {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("OMDb enrichment for {:?} dropped: {}", title, e);
            JsonObject::new()
        }
    }
}
