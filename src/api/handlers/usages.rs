//! Usage registration handler

use axum::Json;
use tracing::info;

use crate::api::dto::UseRegiRequest;
use crate::api::JsonForm;
use crate::application::summary::{SummaryKind, SummaryResponse};

/// Acknowledge a usage-event batch; every record is reported as inserted.
#[utoipa::path(
    post,
    path = "/r2/use/regi",
    tag = "Usages",
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
pub async fn use_regi(JsonForm(req): JsonForm<UseRegiRequest>) -> Json<SummaryResponse> {
    let response = SummaryResponse::new(SummaryKind::Register, req.usage.len());
    info!(bid = %req.bid, reqcnt = response.reqcnt, "usage registration acknowledged");
    Json(response)
}
