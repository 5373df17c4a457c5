//! Charger info, status and QR handlers

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::api::dto::{
    ChargerInfoListRequest, ChargerQrRequest, ChargerStatusListRequest,
    ChargerStatusUpdateRequest,
};
use crate::api::{AppState, JsonForm};
use crate::application::selectors::{self, FixtureEndpoint};
use crate::application::summary::{SummaryKind, SummaryResponse};
use crate::shared::errors::ApiError;

/// Charger descriptions, paged.
#[utoipa::path(
    post,
    path = "/r2/charger/info/list",
    tag = "Chargers",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Charger info document"),
        (status = 400, description = "Unknown page"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn charger_info_list(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<ChargerInfoListRequest>,
) -> Result<Json<Value>, ApiError> {
    let key = selectors::resolve(FixtureEndpoint::ChargerInfoList, req.pageno.as_deref())?;
    info!(bid = %req.bid, key, "charger info list requested");
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}

/// Unpaged charger snapshot.
#[utoipa::path(
    post,
    path = "/r2/charger/info/listall",
    tag = "Chargers",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Charger info document"),
        (status = 400, description = "Unknown page"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn charger_info_listall(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<ChargerInfoListRequest>,
) -> Result<Json<Value>, ApiError> {
    let key = selectors::resolve(FixtureEndpoint::ChargerInfoListAll, req.pageno.as_deref())?;
    info!(bid = %req.bid, key, "charger info listall requested");
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}

/// Charger status snapshot; `kind` selects the fixture.
#[utoipa::path(
    post,
    path = "/r2/charger/status/list",
    tag = "Chargers",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "Charger status document"),
        (status = 400, description = "Unknown kind"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn charger_status_list(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<ChargerStatusListRequest>,
) -> Result<Json<Value>, ApiError> {
    let key = selectors::resolve(FixtureEndpoint::ChargerStatusList, req.kind.as_deref())?;
    info!(bid = %req.bid, key, "charger status list requested");
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}

/// Acknowledge reported charger states; every record counts as updated.
#[utoipa::path(
    post,
    path = "/r2/charger/status/update",
    tag = "Chargers",
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
pub async fn charger_status_update(
    JsonForm(req): JsonForm<ChargerStatusUpdateRequest>,
) -> Json<SummaryResponse> {
    let response = SummaryResponse::new(SummaryKind::Update, req.cstat.len());
    info!(bid = %req.bid, reqcnt = response.reqcnt, "charger status update acknowledged");
    Json(response)
}

/// QR payload document.
#[utoipa::path(
    post,
    path = "/r2/charger/qr",
    tag = "Chargers",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding the JSON request"
    ),
    responses(
        (status = 200, description = "QR document"),
        (status = 400, description = "Unknown page"),
        (status = 404, description = "Backing fixture absent"),
        (status = 422, description = "Field rule violated")
    )
)]
pub async fn charger_qr(
    State(state): State<AppState>,
    JsonForm(req): JsonForm<ChargerQrRequest>,
) -> Result<Json<Value>, ApiError> {
    let key = selectors::resolve(FixtureEndpoint::ChargerQr, req.pageno.as_deref())?;
    info!(bid = %req.bid, key, "charger qr requested");
    let doc = state.fixtures.load(key).await?;
    Ok(Json(doc))
}
