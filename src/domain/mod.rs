pub mod codes;

pub use codes::{BUSINESS_IDS, CHARGER_STATUS_CODES, RESULT_OK, YN_FLAGS};
