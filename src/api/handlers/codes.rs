//! Common-code handlers

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::api::dto::CodeListRequest;
use crate::api::{AppState, JsonForm};
use crate::application::selectors::{self, FixtureEndpoint};
use crate::shared::errors::ApiError;

/// Fixed code-list document; no selector.
#[utoipa::path(
    post,
    path = "/r2/code/list",
    tag = "Codes",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Common code document"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn code_list(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<CodeListRequest>,
) -> Result<Json<Value>, ApiError> {
    info!(bid = %req.bid, "code list requested");
    let key = selectors::resolve(FixtureEndpoint::CodeList, None)?;
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}
