//! Member-card request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation;

/// `/card/update`: member cards to suspend or release.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CardUpdateRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    /// May be present but empty; an empty batch yields a zero summary.
    #[validate(nested)]
    pub card: Vec<CardUpdate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CardUpdate {
    #[validate(custom(function = validation::card_number))]
    pub no: String,
    #[validate(custom(function = validation::yn_flag, message = "stop 필드는 Y 또는 N이어야 합니다."))]
    pub stop: String,
}

/// `/card/list`: `kind` selects the deployment snapshot fixture.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CardListRequest {
    #[validate(custom(function = validation::business_id))]
    pub bid: String,
    #[validate(length(equal = 16, message = "bkey는 16자리여야 합니다."))]
    pub bkey: String,
    /// Checked against the selector map, not here; omitted means `"1"`.
    pub kind: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn request(cards: Vec<CardUpdate>) -> CardUpdateRequest {
        CardUpdateRequest {
            bid: "EV".to_string(),
            bkey: "1111111111111111".to_string(),
            card: cards,
        }
    }

    fn card(no: &str, stop: &str) -> CardUpdate {
        CardUpdate {
            no: no.to_string(),
            stop: stop.to_string(),
        }
    }

    #[test]
    fn valid_card_batch_passes() {
        let req = request(vec![card("1234567890123456", "Y"), card("0000000000000001", "N")]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_card_list_is_valid() {
        assert!(request(Vec::new()).validate().is_ok());
    }

    #[test]
    fn short_or_non_numeric_card_number_fails() {
        assert!(request(vec![card("123", "Y")]).validate().is_err());
        assert!(request(vec![card("12345678901234A6", "Y")]).validate().is_err());
    }

    #[test]
    fn stop_flag_outside_yn_fails() {
        assert!(request(vec![card("1234567890123456", "S")]).validate().is_err());
    }

    #[test]
    fn violation_in_any_list_item_fails_the_request() {
        let req = request(vec![card("1234567890123456", "Y"), card("999", "N")]);
        assert!(req.validate().is_err());
    }
}
