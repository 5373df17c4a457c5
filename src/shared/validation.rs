//! Shared field-format rules.
//!
//! Every request model declares its constraints with `validator` attributes
//! pointing at these functions, so a rule like "16-digit card number" is
//! written once and reused by every endpoint that carries the field.
//! Numeric-looking fields stay strings throughout: exact widths and leading
//! zeros are part of the wire contract.

use std::borrow::Cow;

use validator::ValidationError;

use crate::domain::codes::{BUSINESS_IDS, CHARGER_STATUS_CODES, YN_FLAGS};

fn rule_error(code: &'static str, message: impl Into<String>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message.into()));
    err
}

/// Non-empty and every character an ASCII digit.
pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Exactly `width` ASCII digits.
pub fn digits_exact(value: &str, width: usize) -> bool {
    value.len() == width && value.bytes().all(|b| b.is_ascii_digit())
}

fn fixed_digits(value: &str, width: usize) -> Result<(), ValidationError> {
    if !digits_exact(value, width) {
        return Err(rule_error(
            "fixed_digits",
            format!("{width}자리 숫자형식이어야 합니다."),
        ));
    }
    Ok(())
}

pub fn digits2(value: &str) -> Result<(), ValidationError> {
    fixed_digits(value, 2)
}

pub fn digits6(value: &str) -> Result<(), ValidationError> {
    fixed_digits(value, 6)
}

pub fn digits8(value: &str) -> Result<(), ValidationError> {
    fixed_digits(value, 8)
}

pub fn digits14(value: &str) -> Result<(), ValidationError> {
    fixed_digits(value, 14)
}

pub fn digits_only(value: &str) -> Result<(), ValidationError> {
    if !is_digits(value) {
        return Err(rule_error("digits_only", "숫자형식이어야 합니다."));
    }
    Ok(())
}

pub fn business_id(value: &str) -> Result<(), ValidationError> {
    if value.len() != 2 || !BUSINESS_IDS.contains(&value) {
        return Err(rule_error(
            "business_id",
            "bid는 \"EV\" 또는 \"KP\"이어야 합니다.",
        ));
    }
    Ok(())
}

pub fn card_number(value: &str) -> Result<(), ValidationError> {
    if !digits_exact(value, 16) {
        return Err(rule_error("card_number", "회원카드는 16자리 숫자형식입니다."));
    }
    Ok(())
}

pub fn yn_flag(value: &str) -> Result<(), ValidationError> {
    if !YN_FLAGS.contains(&value) {
        return Err(rule_error("yn_flag", "Y 또는 N이어야 합니다."));
    }
    Ok(())
}

pub fn charger_status(value: &str) -> Result<(), ValidationError> {
    if !CHARGER_STATUS_CODES.contains(&value) {
        return Err(rule_error(
            "charger_status",
            "stat는 정의된 상태코드여야 합니다.",
        ));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
