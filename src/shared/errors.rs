//! Request-local error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::application::selectors::SelectorError;
use crate::infrastructure::fixtures::FixtureError;

/// Error body shape kept from the service being mocked: `{"detail": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Everything a `/r2` endpoint can fail with. Partner endpoints report
/// their failures inside [`crate::application::minting::PartnerEnvelope`]
/// instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed a field rule, or was not decodable at all.
    #[error("{0}")]
    Validation(String),

    /// The selector value is not a key of the endpoint's selector map.
    #[error("invalid selector: {0}")]
    BadSelector(SelectorError),

    /// The selector is known but its backing document is absent.
    #[error("fixture not found: {0}")]
    FixtureMissing(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadSelector(_) => StatusCode::BAD_REQUEST,
            ApiError::FixtureMissing(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SelectorError> for ApiError {
    fn from(err: SelectorError) -> Self {
        ApiError::BadSelector(err)
    }
}

impl From<FixtureError> for ApiError {
    fn from(err: FixtureError) -> Self {
        match err {
            FixtureError::NotFound(key) => ApiError::FixtureMissing(key),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        if status.is_server_error() {
            tracing::error!(%status, %detail, "request failed");
        } else {
            tracing::warn!(%status, %detail, "request rejected");
        }
        (status, Json(ErrorDetail { detail })).into_response()
    }
}

// ── Tests ──────────────────────────────────────────────────────
