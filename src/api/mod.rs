pub mod details;
pub mod envelope;
pub mod error;
pub mod health;
pub mod params;
pub mod search;
pub mod trending;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub use envelope::Envelope;
pub use error::ApiError;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // TMDB + OMDb
        .route("/search", get(search::search))
        .route("/trending", get(trending::trending))
        .route("/details", get(details::details))
        .with_state(state)
}
