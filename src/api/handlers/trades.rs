//! Trade registration and listing handlers

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::api::dto::{TradeListRequest, TradeRegiRequest};
use crate::api::{AppState, JsonForm};
use crate::application::selectors::{self, FixtureEndpoint};
use crate::application::summary::{SummaryKind, SummaryResponse};
use crate::shared::errors::ApiError;

/// Acknowledge a transaction batch; every record is reported as inserted.
#[utoipa::path(
    post,
    path = "/r2/trade/regi",
    tag = "Trades",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Registration summary", body = SummaryResponse),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn trade_regi(JsonForm(req): JsonForm<TradeRegiRequest>) -> Json<SummaryResponse> {
    let response = SummaryResponse::new(SummaryKind::Register, req.trade.len());
    info!(bid = %req.bid, reqcnt = response.reqcnt, "trade registration acknowledged");
    Json(response)
}

/// Trade page; `pageno` selects the fixture.
#[utoipa::path(
    post,
    path = "/r2/trade/list",
    tag = "Trades",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Trade list document"),
        (status = 400, description = "Unknown page"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn trade_list(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<TradeListRequest>,
) -> Result<Json<Value>, ApiError> {
    let key = selectors::resolve(FixtureEndpoint::TradeList, req.pageno.as_deref())?;
    info!(bid = %req.bid, key, "trade list requested");
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}

/// Unpaged trade snapshot.
#[utoipa::path(
    post,
    path = "/r2/trade/listall",
    tag = "Trades",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Trade list document"),
        (status = 400, description = "Unknown page"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn trade_listall(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<TradeListRequest>,
) -> Result<Json<Value>, ApiError> {
    let key = selectors::resolve(FixtureEndpoint::TradeListAll, req.pageno.as_deref())?;
    info!(bid = %req.bid, key, "trade listall requested");
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}
