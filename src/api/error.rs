use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::domain::ProviderError;

/// Handler-level failure, rendered as a plain-text body with a status code
#[derive(Debug)]
pub enum ApiError {
    /// A required query parameter is missing or empty
    MissingParameter(&'static str),
    /// The primary provider call failed
    Upstream(ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(ProviderError::Transport(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Upstream(ProviderError::Status(code)) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Upstream(ProviderError::Decode(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::MissingParameter(msg) => *msg,
            ApiError::Upstream(ProviderError::Transport(_)) => "TMDB request failed",
            ApiError::Upstream(ProviderError::Status(_)) => "TMDB error",
            ApiError::Upstream(ProviderError::Decode(_)) => "Failed to decode TMDB response",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingParameter(msg) => f.write_str(msg),
            ApiError::Upstream(e) => write!(f, "{}: {}", self.message(), e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Upstream(e) = &self {
            tracing::warn!("TMDB call failed: {}", e);
        }
        (self.status(), self.message()).into_response()
    }
}
