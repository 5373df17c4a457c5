//! Usage-event request models (charging events with no member card).

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation;

/// `/use/regi`: usage events to register.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UseRegiRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    #[serde(rename = "use")]
    #[validate(nested)]
    pub usage: Vec<UsageRecord>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UsageRecord {
    #[validate(custom(function = validation::digits6, message = "sid는 6자리 숫자형식입니다."))]
    pub sid: String,
    #[validate(custom(function = validation::digits2, message = "cid는 2자리 숫자형식입니다."))]
    pub cid: String,
    #[validate(custom(function = validation::digits14, message = "sdate는 14자리 숫자형식입니다."))]
    pub sdate: String,
    #[validate(custom(function = validation::digits14, message = "edate는 14자리 숫자형식입니다."))]
    pub edate: String,
    #[validate(custom(function = validation::digits_only, message = "pwr은 숫자형식이어야 합니다."))]
    pub pwr: String,
    /// Receipt timestamp, optional but 14 digits when present.
    #[validate(custom(function = validation::digits14, message = "rdate는 14자리 숫자형식입니다."))]
    pub rdate: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────
