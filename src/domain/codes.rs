//! Enumerated code sets shared by request rules and response envelopes.

/// Partner systems allowed to call the roaming API.
pub const BUSINESS_IDS: [&str; 2] = ["EV", "KP"];

/// The only two values accepted by Y/N flag fields.
pub const YN_FLAGS: [&str; 2] = ["Y", "N"];

/// Charger status codes accepted by `/charger/status/update`.
///
/// 0 통신이상, 1 통신정상, 2 충전대기, 3 충전중, 4 운영중지, 5 점검중,
/// 9 상태미확인.
pub const CHARGER_STATUS_CODES: [&str; 7] = ["0", "1", "2", "3", "4", "5", "9"];

/// Result code carried by summary responses on success.
pub const RESULT_OK: &str = "0";

/// Result and error codes used by the partner-update envelopes.
///
/// Partner endpoints report failures inside the envelope (`result`,
/// `errcode`, `resultmsg`) rather than through the error body the `/r2`
/// endpoints use.
pub mod partner {
    pub const RESULT_OK: u32 = 0;
    pub const RESULT_FAIL: u32 = 1;

    pub const ERR_NONE: u32 = 0;
    /// The request carried an empty `list`.
    pub const ERR_NO_DATA: u32 = 4;
    /// A list item lacked a required key.
    pub const ERR_MISSING_FIELD: u32 = 5;
    /// A list item carried a malformed optional field.
    pub const ERR_BAD_FIELD: u32 = 6;

    pub const MSG_OK: &str = "SUCCESS";
    pub const MSG_NO_DATA: &str = "no data";
}
