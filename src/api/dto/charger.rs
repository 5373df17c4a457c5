//! Charger and charging-station request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation;

/// `/charger/info/list` and `/charger/info/listall`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChargerInfoListRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    pub pageno: Option<String>,
}

/// `/charger/status/list`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChargerStatusListRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    pub kind: Option<String>,
}

/// `/charger/status/update`: reported charger states.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChargerStatusUpdateRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    #[validate(nested)]
    pub cstat: Vec<ChargerStatusEntry>,
}

/// One charger's reported state. Station and charger ids are length-checked
/// only; the status code is constrained to the fixed enumeration.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChargerStatusEntry {
    #[validate(length(equal = 6, message = "sid는 6자리여야 합니다."))]
    pub sid: String,
    #[validate(length(equal = 2, message = "cid는 2자리여야 합니다."))]
    pub cid: String,
    #[validate(custom(function = validation::charger_status))]
    pub stat: String,
}

/// `/charger/qr`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChargerQrRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    pub pageno: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sid: &str, cid: &str, stat: &str) -> ChargerStatusEntry {
        ChargerStatusEntry {
            sid: sid.to_string(),
            cid: cid.to_string(),
            stat: stat.to_string(),
        }
    }

    #[test]
    fn every_defined_status_code_passes() {
        for stat in ["0", "1", "2", "3", "4", "5", "9"] {
            assert!(entry("ST0001", "01", stat).validate().is_ok(), "stat {stat}");
        }
    }

    #[test]
    fn undefined_status_code_fails() {
        assert!(entry("ST0001", "01", "6").validate().is_err());
        assert!(entry("ST0001", "01", "").validate().is_err());
    }

    #[test]
    fn station_id_is_length_checked_not_digit_checked() {
        assert!(entry("ABCDEF", "Z1", "2").validate().is_ok());
        assert!(entry("ABCDE", "01", "2").validate().is_err());
        assert!(entry("ABCDEF", "001", "2").validate().is_err());
    }

    #[test]
    fn status_update_accepts_an_empty_batch() {
        let req = ChargerStatusUpdateRequest {
            bid: "KP".to_string(),
            bkey: "1111111111111111".to_string(),
            cstat: Vec::new(),
        };
        assert!(req.validate().is_ok());
    }
}
