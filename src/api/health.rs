use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

/// Liveness only: the upstream providers are named, not contacted.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up; lists the configured providers")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "providers": {
            "metadata": state.metadata.name(),
            "ratings": state.ratings.name(),
        }
    }))
}
