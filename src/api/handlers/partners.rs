//! Partner-update handlers.
//!
//! These routes are path-parameterized by the calling partner system and
//! keep their error convention inside the envelope: validation failures are
//! reported through `result`/`errcode`/`resultmsg` with a matching
//! transport status, never through the `detail` body the `/r2` routes use.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use crate::api::dto::PartnerUpdateRequest;
use crate::api::{AppState, JsonForm};
use crate::application::minting::{self, PartnerEnvelope, PartnerOp};

async fn run(
    op: PartnerOp,
    partner: &str,
    req: PartnerUpdateRequest,
    state: &AppState,
) -> (StatusCode, Json<PartnerEnvelope>) {
    match minting::process(op, &req.list, state.suffixes.as_ref()) {
        Ok(envelope) => {
            info!(partner, rcv_cnt = envelope.rcv_cnt, errcode = envelope.errcode, "partner update processed");
            (StatusCode::OK, Json(envelope))
        }
        Err(err) => {
            warn!(partner, %err, "partner update rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(PartnerEnvelope::rejected(&err)),
            )
        }
    }
}

/// Register charging stations; mints a `csid` per item.
#[utoipa::path(
    post,
    path = "/{partner}/cs/update",
    tag = "Partners",
    params(("partner" = String, Path, description = "Calling partner system")),
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding a JSON object with a `list` field"
    ),
    responses(
        (status = 200, description = "Envelope with minted station ids", body = PartnerEnvelope),
        (status = 422, description = "Missing or malformed item field", body = PartnerEnvelope)
    )
)]
pub async fn cs_update(
    State(state): State<AppState>,
    Path(partner): Path<String>,
    JsonForm(req): JsonForm<PartnerUpdateRequest>,
) -> (StatusCode, Json<PartnerEnvelope>) {
    run(PartnerOp::StationUpdate, &partner, req, &state).await
}

/// Register chargers; mints a `cpid` per item.
#[utoipa::path(
    post,
    path = "/{partner}/cp/update",
    tag = "Partners",
    params(("partner" = String, Path, description = "Calling partner system")),
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding a JSON object with a `list` field"
    ),
    responses(
        (status = 200, description = "Envelope with minted charger ids", body = PartnerEnvelope),
        (status = 422, description = "Missing or malformed item field", body = PartnerEnvelope)
    )
)]
pub async fn cp_update(
    State(state): State<AppState>,
    Path(partner): Path<String>,
    JsonForm(req): JsonForm<PartnerUpdateRequest>,
) -> (StatusCode, Json<PartnerEnvelope>) {
    run(PartnerOp::ChargerUpdate, &partner, req, &state).await
}

/// Echo reported charger states; mints nothing, counts as updates.
#[utoipa::path(
    post,
    path = "/{partner}/cp/status/update",
    tag = "Partners",
    params(("partner" = String, Path, description = "Calling partner system")),
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding a JSON object with a `list` field"
    ),
    responses(
        (status = 200, description = "Status echo envelope", body = PartnerEnvelope),
        (status = 422, description = "Missing or malformed item field", body = PartnerEnvelope)
    )
)]
pub async fn cp_status_update(
    State(state): State<AppState>,
    Path(partner): Path<String>,
    JsonForm(req): JsonForm<PartnerUpdateRequest>,
) -> (StatusCode, Json<PartnerEnvelope>) {
    run(PartnerOp::ChargerStatusUpdate, &partner, req, &state).await
}

/// Register member ids; mints a `vid` per item.
#[utoipa::path(
    post,
    path = "/{partner}/uid/update",
    tag = "Partners",
    params(("partner" = String, Path, description = "Calling partner system")),
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "`messages` form field holding a JSON object with a `list` field"
    ),
    responses(
        (status = 200, description = "Envelope with minted member ids", body = PartnerEnvelope),
        (status = 422, description = "Missing or malformed item field", body = PartnerEnvelope)
    )
)]
pub async fn uid_update(
    State(state): State<AppState>,
    Path(partner): Path<String>,
    JsonForm(req): JsonForm<PartnerUpdateRequest>,
) -> (StatusCode, Json<PartnerEnvelope>) {
    run(PartnerOp::UidUpdate, &partner, req, &state).await
}
