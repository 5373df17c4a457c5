//! Partner-update request model.
//!
//! Partner systems send arbitrary JSON objects; only the `list` field is
//! interpreted, and its items are validated per-key by the minting layer
//! rather than by typed rules here.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PartnerUpdateRequest {
    /// Absent means empty, which is answered with the "no data" envelope.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub list: Vec<serde_json::Value>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_ignored() {
        let req: PartnerUpdateRequest =
            serde_json::from_str(r#"{"version":"1.0","list":[{"spid":"AB"}],"extra":42}"#).unwrap();
        assert_eq!(req.list.len(), 1);
    }

    #[test]
    fn absent_list_defaults_to_empty() {
        let req: PartnerUpdateRequest = serde_json::from_str(r#"{"version":"1.0"}"#).unwrap();
        assert!(req.list.is_empty());
    }
}
