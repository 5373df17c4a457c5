//! Summary synthesis for the register/update endpoints.
//!
//! This service is a test double: no record is persisted, so every count is
//! a direct function of the input length and the operation kind. An empty
//! batch is a valid request and yields a zero-filled summary.

use chrono::Local;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::codes::RESULT_OK;

/// What a register/update endpoint claims to have done with N records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// All N records reported as inserted.
    Register,
    /// All N records reported as updated.
    Update,
}

/// Fixed-shape acknowledgement returned by `/card/update`, `/trade/regi`,
/// `/use/regi` and `/charger/status/update`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    /// `"0"` on success.
    pub result: String,
    /// Response construction time, `YYYYMMDDHHMMSS`.
    pub rdate: String,
    pub reqcnt: usize,
    pub inscnt: usize,
    pub updcnt: usize,
    pub dupcnt: usize,
    pub limitcnt: usize,
    pub errcnt: usize,
    #[schema(value_type = Vec<Object>)]
    pub errlist: Vec<serde_json::Value>,
}

/// Local wall-clock time in the `YYYYMMDDHHMMSS` format every envelope uses.
pub fn timestamp_now() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

impl SummaryResponse {
    pub fn new(kind: SummaryKind, received: usize) -> Self {
        let (inscnt, updcnt) = match kind {
            SummaryKind::Register => (received, 0),
            SummaryKind::Update => (0, received),
        };
        Self {
            result: RESULT_OK.to_string(),
            rdate: timestamp_now(),
            reqcnt: received,
            inscnt,
            updcnt,
            dupcnt: 0,
            limitcnt: 0,
            errcnt: 0,
            errlist: Vec::new(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::digits_exact;

    #[test]
    fn register_reports_all_as_inserted() {
        let s = SummaryResponse::new(SummaryKind::Register, 3);
        assert_eq!(s.result, "0");
        assert_eq!(s.reqcnt, 3);
        assert_eq!(s.inscnt, 3);
        assert_eq!(s.updcnt, 0);
        assert_eq!((s.dupcnt, s.limitcnt, s.errcnt), (0, 0, 0));
        assert!(s.errlist.is_empty());
    }

    #[test]
    fn update_reports_all_as_updated() {
        let s = SummaryResponse::new(SummaryKind::Update, 5);
        assert_eq!(s.inscnt, 0);
        assert_eq!(s.updcnt, 5);
        assert_eq!(s.reqcnt, 5);
    }

    #[test]
    fn empty_batch_is_a_valid_zero_summary() {
        let s = SummaryResponse::new(SummaryKind::Update, 0);
        assert_eq!(s.result, "0");
        assert_eq!(s.reqcnt, 0);
        assert_eq!(s.updcnt, 0);
        assert_eq!(s.errcnt, 0);
        assert!(s.errlist.is_empty());
    }

    #[test]
    fn counts_are_stable_across_repeated_calls() {
        let a = SummaryResponse::new(SummaryKind::Register, 7);
        let b = SummaryResponse::new(SummaryKind::Register, 7);
        assert_eq!(a.inscnt, b.inscnt);
        assert_eq!(a.reqcnt, b.reqcnt);
    }

    #[test]
    fn rdate_is_a_14_digit_stamp_and_non_decreasing() {
        let a = SummaryResponse::new(SummaryKind::Update, 1);
        let b = SummaryResponse::new(SummaryKind::Update, 1);
        assert!(digits_exact(&a.rdate, 14));
        assert!(digits_exact(&b.rdate, 14));
        // Fixed-width digit strings order like the instants they encode.
        assert!(a.rdate <= b.rdate);
    }
}
