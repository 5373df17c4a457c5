//! Common-code request model.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation;

/// `/code/list`: credential pair only; the response is a fixed document.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CodeListRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
}

// ── Tests ──────────────────────────────────────────────────────
