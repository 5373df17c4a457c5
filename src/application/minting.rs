//! Per-item transforms for the path-parameterized partner endpoints
//! (`/{partner}/cs/update` and friends).
//!
//! Partner payloads are free-form JSON objects, so items are handled as
//! loosely-typed maps with explicit required-key checks instead of typed
//! request models. A single bad item rejects the whole call; there is no
//! partial acceptance.

use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::codes::partner as codes;
use crate::domain::codes::YN_FLAGS;
use crate::shared::validation::digits_exact;

/// Source of the fixed-width numeric suffix appended to minted identifiers.
///
/// Injectable so tests can pin the sequence; production uses
/// [`RandomSuffix`].
pub trait SuffixSource: Send + Sync {
    /// Six decimal digits, zero-padded, drawn uniformly with replacement.
    fn next_suffix(&self) -> String;
}

pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&self) -> String {
        format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
    }
}

/// Which partner operation is being simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerOp {
    /// `cs/update`: registers charging stations, mints `csid`.
    StationUpdate,
    /// `cp/update`: registers chargers, mints `cpid`.
    ChargerUpdate,
    /// `cp/status/update`: echoes charger status, mints nothing.
    ChargerStatusUpdate,
    /// `uid/update`: registers member ids, mints `vid`.
    UidUpdate,
}

impl PartnerOp {
    /// Keys every list item must carry. `spid` doubles as the prefix of any
    /// minted identifier.
    pub fn required_keys(self) -> &'static [&'static str] {
        match self {
            PartnerOp::StationUpdate => &["spid"],
            PartnerOp::ChargerUpdate => &["spid", "csid"],
            PartnerOp::ChargerStatusUpdate => &["spid", "csid", "cpid", "stat"],
            PartnerOp::UidUpdate => &["spid", "uid"],
        }
    }

    fn minted_key(self) -> Option<&'static str> {
        match self {
            PartnerOp::StationUpdate => Some("csid"),
            PartnerOp::ChargerUpdate => Some("cpid"),
            PartnerOp::ChargerStatusUpdate => None,
            PartnerOp::UidUpdate => Some("vid"),
        }
    }

    fn counts_as_update(self) -> bool {
        matches!(self, PartnerOp::ChargerStatusUpdate)
    }
}

/// Why a partner call was rejected as a whole.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartnerError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("field {0} must be Y or N")]
    BadFlag(&'static str),
    #[error("field {0} must be an 8-digit date")]
    BadDate(&'static str),
}

impl PartnerError {
    fn errcode(&self) -> u32 {
        match self {
            PartnerError::MissingField(_) => codes::ERR_MISSING_FIELD,
            PartnerError::BadFlag(_) | PartnerError::BadDate(_) => codes::ERR_BAD_FIELD,
        }
    }
}

/// Envelope returned by every partner-update endpoint, on success and on
/// failure alike; the transport status distinguishes the two.
#[derive(Debug, Serialize, ToSchema)]
pub struct PartnerEnvelope {
    pub result: u32,
    pub errcode: u32,
    pub resultmsg: String,
    pub snd_cnt: usize,
    pub rcv_cnt: usize,
    pub normal_cnt: usize,
    pub ins_cnt: usize,
    pub upd_cnt: usize,
    pub err_cnt: usize,
    #[schema(value_type = Vec<Object>)]
    pub list: Vec<Value>,
}

impl PartnerEnvelope {
    fn zeroed(result: u32, errcode: u32, resultmsg: String) -> Self {
        Self {
            result,
            errcode,
            resultmsg,
            snd_cnt: 0,
            rcv_cnt: 0,
            normal_cnt: 0,
            ins_cnt: 0,
            upd_cnt: 0,
            err_cnt: 0,
            list: Vec::new(),
        }
    }

    fn success(op: PartnerOp, list: Vec<Value>) -> Self {
        let n = list.len();
        let (ins_cnt, upd_cnt) = if op.counts_as_update() { (0, n) } else { (n, 0) };
        Self {
            result: codes::RESULT_OK,
            errcode: codes::ERR_NONE,
            resultmsg: codes::MSG_OK.to_string(),
            snd_cnt: n,
            rcv_cnt: n,
            normal_cnt: n,
            ins_cnt,
            upd_cnt,
            err_cnt: 0,
            list,
        }
    }

    fn no_data() -> Self {
        Self::zeroed(
            codes::RESULT_FAIL,
            codes::ERR_NO_DATA,
            codes::MSG_NO_DATA.to_string(),
        )
    }

    /// Whole-call rejection: every counter zero except `err_cnt`, fixed
    /// at 1 regardless of how many items were sent.
    pub fn rejected(err: &PartnerError) -> Self {
        let mut envelope = Self::zeroed(codes::RESULT_FAIL, err.errcode(), err.to_string());
        envelope.err_cnt = 1;
        envelope
    }
}

/// Map every item through the operation's transform and wrap the results.
///
/// An empty list is answered with the "no data" envelope rather than a
/// zero-filled success.
pub fn process(
    op: PartnerOp,
    items: &[Value],
    suffixes: &dyn SuffixSource,
) -> Result<PartnerEnvelope, PartnerError> {
    if items.is_empty() {
        return Ok(PartnerEnvelope::no_data());
    }
    let mut mapped = Vec::with_capacity(items.len());
    for item in items {
        mapped.push(transform_item(op, item, suffixes)?);
    }
    Ok(PartnerEnvelope::success(op, mapped))
}

/// Optional descriptive fields that, when present, must still be well
/// formed.
const FLAG_KEYS: [&str; 3] = ["useyn", "parkfree", "limityn"];
const DATE_KEYS: [&str; 2] = ["opendate", "closedate"];

fn transform_item(
    op: PartnerOp,
    item: &Value,
    suffixes: &dyn SuffixSource,
) -> Result<Value, PartnerError> {
    let mut out = Map::new();
    for key in op.required_keys() {
        let value = require_str(item, key)?;
        out.insert((*key).to_string(), Value::String(value.to_string()));
    }
    check_optional_shapes(item)?;
    if let Some(minted) = op.minted_key() {
        let spid = require_str(item, "spid")?;
        let id = format!("{}{}", spid, suffixes.next_suffix());
        out.insert(minted.to_string(), Value::String(id));
    }
    Ok(Value::Object(out))
}

fn require_str<'a>(item: &'a Value, key: &'static str) -> Result<&'a str, PartnerError> {
    match item.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(PartnerError::MissingField(key)),
    }
}

fn check_optional_shapes(item: &Value) -> Result<(), PartnerError> {
    for key in FLAG_KEYS {
        if let Some(v) = item.get(key).and_then(Value::as_str) {
            if !YN_FLAGS.contains(&v) {
                return Err(PartnerError::BadFlag(key));
            }
        }
    }
    for key in DATE_KEYS {
        if let Some(v) = item.get(key).and_then(Value::as_str) {
            if !digits_exact(v, 8) {
                return Err(PartnerError::BadDate(key));
            }
        }
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use serde_json::json;

    use super::*;

    /// Deterministic counter-based suffixes for assertions.
    #[derive(Default)]
    struct SeqSuffix(AtomicU32);

    impl SuffixSource for SeqSuffix {
        fn next_suffix(&self) -> String {
            format!("{:06}", self.0.fetch_add(1, Ordering::Relaxed))
        }
    }

    #[test]
    fn random_suffix_is_six_digits() {
        let s = RandomSuffix;
        for _ in 0..100 {
            let suffix = s.next_suffix();
            assert!(digits_exact(&suffix, 6), "bad suffix {suffix}");
        }
    }

    #[test]
    fn station_update_mints_one_id_per_item() {
        let items = vec![
            json!({"spid": "AB", "name": "station 1"}),
            json!({"spid": "AB", "name": "station 2"}),
            json!({"spid": "CD"}),
        ];
        let envelope = process(PartnerOp::StationUpdate, &items, &SeqSuffix::default()).unwrap();
        assert_eq!(envelope.result, codes::RESULT_OK);
        assert_eq!(envelope.snd_cnt, 3);
        assert_eq!(envelope.rcv_cnt, 3);
        assert_eq!(envelope.normal_cnt, 3);
        assert_eq!(envelope.ins_cnt, 3);
        assert_eq!(envelope.upd_cnt, 0);
        assert_eq!(envelope.err_cnt, 0);
        assert_eq!(envelope.list.len(), 3);
        assert_eq!(envelope.list[0]["csid"], "AB000000");
        assert_eq!(envelope.list[1]["csid"], "AB000001");
        assert_eq!(envelope.list[2]["csid"], "CD000002");
        assert_eq!(envelope.list[2]["spid"], "CD");
    }

    #[test]
    fn suffixes_are_drawn_with_replacement() {
        // A constant source yields duplicate ids; nothing deduplicates them.
        struct Fixed;
        impl SuffixSource for Fixed {
            fn next_suffix(&self) -> String {
                "123456".to_string()
            }
        }
        let items = vec![json!({"spid": "AB"}), json!({"spid": "AB"})];
        let envelope = process(PartnerOp::StationUpdate, &items, &Fixed).unwrap();
        assert_eq!(envelope.list[0]["csid"], envelope.list[1]["csid"]);
    }

    #[test]
    fn status_update_echoes_without_minting() {
        let items = vec![json!({
            "spid": "AB", "csid": "AB000001", "cpid": "AB000002", "stat": "3"
        })];
        let envelope =
            process(PartnerOp::ChargerStatusUpdate, &items, &SeqSuffix::default()).unwrap();
        assert_eq!(envelope.ins_cnt, 0);
        assert_eq!(envelope.upd_cnt, 1);
        let item = envelope.list[0].as_object().unwrap();
        assert_eq!(item.len(), 4);
        assert_eq!(item["stat"], "3");
    }

    #[test]
    fn empty_list_yields_no_data_envelope() {
        let envelope = process(PartnerOp::UidUpdate, &[], &SeqSuffix::default()).unwrap();
        assert_eq!(envelope.result, codes::RESULT_FAIL);
        assert_eq!(envelope.errcode, codes::ERR_NO_DATA);
        assert_eq!(envelope.resultmsg, "no data");
        assert_eq!(envelope.snd_cnt, 0);
        assert!(envelope.list.is_empty());
    }

    #[test]
    fn missing_required_key_rejects_the_whole_call() {
        let items = vec![
            json!({"spid": "AB", "uid": "1234567890123456"}),
            json!({"uid": "1234567890123457"}),
        ];
        let err = process(PartnerOp::UidUpdate, &items, &SeqSuffix::default()).unwrap_err();
        assert_eq!(err, PartnerError::MissingField("spid"));

        let envelope = PartnerEnvelope::rejected(&err);
        assert_eq!(envelope.result, codes::RESULT_FAIL);
        assert_eq!(envelope.errcode, codes::ERR_MISSING_FIELD);
        assert_eq!(envelope.resultmsg, "missing required field: spid");
        assert_eq!(envelope.err_cnt, 1);
        assert_eq!(
            (envelope.snd_cnt, envelope.rcv_cnt, envelope.ins_cnt, envelope.upd_cnt),
            (0, 0, 0, 0)
        );
        assert!(envelope.list.is_empty());
    }

    #[test]
    fn malformed_optional_fields_reject_the_call() {
        let items = vec![json!({"spid": "AB", "useyn": "maybe"})];
        let err = process(PartnerOp::StationUpdate, &items, &SeqSuffix::default()).unwrap_err();
        assert_eq!(err, PartnerError::BadFlag("useyn"));

        let items = vec![json!({"spid": "AB", "opendate": "2024-01-01"})];
        let err = process(PartnerOp::StationUpdate, &items, &SeqSuffix::default()).unwrap_err();
        assert_eq!(err, PartnerError::BadDate("opendate"));
    }

    #[test]
    fn well_formed_optional_fields_pass() {
        let items = vec![json!({"spid": "AB", "useyn": "Y", "opendate": "20240101"})];
        let envelope = process(PartnerOp::StationUpdate, &items, &SeqSuffix::default()).unwrap();
        assert_eq!(envelope.normal_cnt, 1);
    }
}
