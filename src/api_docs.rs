use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::search::search,
        api::trending::trending,
        api::details::details,
    ),
    tags(
        (name = "movieradar", description = "MovieRadar API")
    )
)]
pub struct ApiDoc;
