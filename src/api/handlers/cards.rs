//! Member-card handlers

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::api::dto::{CardListRequest, CardUpdateRequest};
use crate::api::{AppState, JsonForm};
use crate::application::selectors::{self, FixtureEndpoint};
use crate::application::summary::{SummaryKind, SummaryResponse};
use crate::shared::errors::ApiError;

/// Acknowledge a card suspend/release batch. Nothing is persisted; the
/// summary reports every received record as updated.
#[utoipa::path(
    post,
    path = "/r2/card/update",
    tag = "Cards",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Update summary", body = SummaryResponse),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn card_update(JsonForm(req): JsonForm<CardUpdateRequest>) -> Json<SummaryResponse> {
    let response = SummaryResponse::new(SummaryKind::Update, req.card.len());
    info!(bid = %req.bid, reqcnt = response.reqcnt, "card update acknowledged");
    Json(response)
}

/// Card list snapshot; `kind` selects the fixture.
#[utoipa::path(
    post,
    path = "/r2/card/list",
    tag = "Cards",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Card list document"),
        (status = 400, description = "Unknown kind"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn card_list(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<CardListRequest>,
) -> Result<Json<Value>, ApiError> {
    let key = selectors::resolve(FixtureEndpoint::CardList, req.kind.as_deref())?;
    info!(bid = %req.bid, key, "card list requested");
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}
