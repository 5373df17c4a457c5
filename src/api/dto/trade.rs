//! Charging-transaction request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation;

/// `/trade/regi`: charging transactions to register.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TradeRegiRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    #[validate(nested)]
    pub trade: Vec<TradeRecord>,
}

/// One charging transaction. Every numeric field is a fixed-width digit
/// string; widths are part of the wire contract.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TradeRecord {
    /// Charging station id, 6 digits.
    #[validate(custom(function = validation::digits6, message = "sid는 6자리 숫자형식입니다."))]
    pub sid: String,
    /// Charger id within the station, 2 digits.
    #[validate(custom(function = validation::digits2, message = "cid는 2자리 숫자형식입니다."))]
    pub cid: String,
    #[validate(custom(function = validation::card_number))]
    pub no: String,
    /// Charge start, `YYYYMMDDHHMMSS`.
    #[validate(custom(function = validation::digits14, message = "sdate는 14자리 숫자형식입니다."))]
    pub sdate: String,
    /// Charge end, `YYYYMMDDHHMMSS`.
    #[validate(custom(function = validation::digits14, message = "edate는 14자리 숫자형식입니다."))]
    pub edate: String,
    /// Delivered power in Wh.
    #[validate(custom(function = validation::digits_only, message = "pwr은 숫자형식이어야 합니다."))]
    pub pwr: String,
    /// Billed amount in KRW.
    #[validate(custom(function = validation::digits_only, message = "amt는 숫자형식이어야 합니다."))]
    pub amt: String,
    /// Settlement fields are optional; widths still apply when present.
    #[validate(custom(function = validation::digits14, message = "paydate는 14자리 숫자형식입니다."))]
    pub paydate: Option<String>,
    #[validate(custom(function = validation::digits_only, message = "appno는 숫자형식이어야 합니다."))]
    pub appno: Option<String>,
}

/// `/trade/list` and `/trade/listall`: fixture echo keyed by page.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TradeListRequest {
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

    fn record() -> TradeRecord {
        TradeRecord {
            sid: "000042".to_string(),
            cid: "01".to_string(),
            no: "1234567890123456".to_string(),
            sdate: "20240131100000".to_string(),
            edate: "20240131103000".to_string(),
            pwr: "7300".to_string(),
            amt: "2100".to_string(),
            paydate: None,
            appno: None,
        }
    }

    #[test]
    fn complete_record_passes() {
        assert!(record().validate().is_ok());
    }

    #[test]
    fn widths_are_enforced() {
        let mut r = record();
        r.sid = "42".to_string();
        assert!(r.validate().is_err());

        let mut r = record();
        r.cid = "001".to_string();
        assert!(r.validate().is_err());

        let mut r = record();
        r.edate = "2024013110".to_string();
        assert!(r.validate().is_err());
    }

    #[test]
    fn optional_settlement_fields_apply_rules_when_present() {
        let mut r = record();
        r.paydate = Some("20240201090000".to_string());
        r.appno = Some("889123".to_string());
        assert!(r.validate().is_ok());

        r.paydate = Some("2024-02-01".to_string());
        assert!(r.validate().is_err());
    }

    #[test]
    fn leading_zeros_survive_validation() {
        let mut r = record();
        r.sid = "000001".to_string();
        r.amt = "0".to_string();
        assert!(r.validate().is_ok());
    }
}
