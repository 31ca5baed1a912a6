//! Field validation shared by every create path
//!
//! The shape checks are pure and never fail loudly; the `require_*` helpers
//! turn a failed check into the [`AppError`] the API returns.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

use crate::error::{AppError, ErrorCode};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("Invalid email regex")
});

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("Invalid phone regex"));

/// `local@domain.tld` with a TLD segment of at least two characters.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Optional leading `+` followed by 10 to 15 ASCII digits.
pub fn is_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Trimmed, non-blank required text field.
pub fn require_text(value: Option<&str>, field: &str, message: &str) -> Result<String, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::required(field, message)),
    }
}

/// Trimmed optional text; blank becomes `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Trimmed, lowercased email that passes [`is_email`].
pub fn require_email(value: Option<&str>) -> Result<String, AppError> {
    let email = value.map(|v| v.trim().to_lowercase()).unwrap_or_default();
    if !is_email(&email) {
        return Err(AppError::new(ErrorCode::InvalidEmail).with_detail("field", "email"));
    }
    Ok(email)
}

/// Trimmed phone that passes [`is_phone`].
pub fn require_phone(value: Option<&str>) -> Result<String, AppError> {
    let phone = value.map(str::trim).unwrap_or_default();
    if !is_phone(phone) {
        return Err(AppError::new(ErrorCode::InvalidPhone).with_detail("field", "phone"));
    }
    Ok(phone.to_string())
}

/// Calendar date in `YYYY-MM-DD` form.
pub fn require_date(value: Option<&str>, field: &str) -> Result<NaiveDate, AppError> {
    let raw = value.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(AppError::new(ErrorCode::InvalidStayDates).with_detail("field", field));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidStayDates,
            format!("{field} must be a date in YYYY-MM-DD format"),
        )
        .with_detail("field", field)
    })
}

/// Loose numeric reading of a JSON value.
///
/// Clients send amounts and counts either as numbers or as strings; both are
/// accepted. An empty string reads as zero, `true`/`false` as 1/0. Arrays,
/// objects, null and non-numeric strings yield `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Positive integer identifier sent as a number or a numeric string.
pub fn coerce_id(value: &Value) -> Option<i32> {
    let n = coerce_number(value)?;
    if n.fract() != 0.0 || n < 1.0 || n > f64::from(i32::MAX) {
        return None;
    }
    Some(n as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b.com"));
        assert!(is_email("Guest.Name+tag@Hotel.CO.IN"));
        assert!(!is_email(""));
        assert!(!is_email("a@b.c"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@.com"));
        assert!(!is_email("ab.com"));
        assert!(!is_email("a@@b.com"));
    }

    #[test]
    fn test_is_phone() {
        assert!(is_phone("+911234567890"));
        assert!(is_phone("1234567890"));
        assert!(is_phone("123456789012345"));
        assert!(!is_phone("123456789"));
        assert!(!is_phone("1234567890123456"));
        assert!(!is_phone("+91 12345 67890"));
        assert!(!is_phone("++911234567890"));
        assert!(!is_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn test_require_email_normalizes() {
        assert_eq!(require_email(Some("  A@B.Com ")).unwrap(), "a@b.com");

        let err = require_email(Some("nope")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEmail);
        assert_eq!(require_email(None).unwrap_err().code, ErrorCode::InvalidEmail);
    }

    #[test]
    fn test_require_phone_trims() {
        assert_eq!(require_phone(Some(" +911234567890 ")).unwrap(), "+911234567890");
        assert_eq!(
            require_phone(Some("12-34")).unwrap_err().code,
            ErrorCode::InvalidPhone
        );
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("  Asha "), "name", "Name is required").unwrap(), "Asha");

        let err = require_text(Some("   "), "name", "Name is required").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Name is required");
        assert!(require_text(None, "name", "Name is required").is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some(" sea view ")), Some("sea view".into()));
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_require_date() {
        let d = require_date(Some("2025-01-03"), "checkIn").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());

        assert_eq!(
            require_date(Some("03/01/2025"), "checkIn").unwrap_err().code,
            ErrorCode::InvalidStayDates
        );
        assert_eq!(
            require_date(None, "checkOut").unwrap_err().code,
            ErrorCode::InvalidStayDates
        );
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(500)), Some(500.0));
        assert_eq!(coerce_number(&json!(12.5)), Some(12.5));
        assert_eq!(coerce_number(&json!(" 42 ")), Some(42.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("Infinity")), None);
        assert_eq!(coerce_number(&json!(null)), None);
        assert_eq!(coerce_number(&json!([1])), None);
    }

    #[test]
    fn test_coerce_id() {
        assert_eq!(coerce_id(&json!(7)), Some(7));
        assert_eq!(coerce_id(&json!("7")), Some(7));
        assert_eq!(coerce_id(&json!(0)), None);
        assert_eq!(coerce_id(&json!(1.5)), None);
        assert_eq!(coerce_id(&json!("x")), None);
        assert_eq!(coerce_id(&json!(1e12)), None);
    }
}
