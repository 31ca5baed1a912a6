//! Unified error codes for the stay backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Intake errors (contact / lead guest fields)
//! - 2xxx: Booking errors
//! - 3xxx: Payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can switch on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request (malformed body, bad path parameter)
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Intake ====================
    /// Email does not look like local@domain.tld
    InvalidEmail = 1001,
    /// Phone is not 10-15 digits with an optional leading +
    InvalidPhone = 1002,

    // ==================== 2xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 2001,
    /// Check-in / check-out missing, unparsable or reversed
    InvalidStayDates = 2002,
    /// Guest count is not a whole number >= 1
    InvalidGuestCount = 2003,

    // ==================== 3xxx: Payment ====================
    /// Payment (transaction) not found
    PaymentNotFound = 3001,
    /// The payment processor rejected or failed the request
    PaymentGatewayFailed = 3002,
    /// The transaction was issued for a different booking
    TransactionBookingMismatch = 3003,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Operator misconfiguration (missing credentials etc.)
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Intake
            ErrorCode::InvalidEmail => "Valid email is required",
            ErrorCode::InvalidPhone => "Valid phone is required",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::InvalidStayDates => "Dates are required",
            ErrorCode::InvalidGuestCount => "Guests must be >= 1",

            // Payment
            ErrorCode::PaymentNotFound => "Payment not found",
            ErrorCode::PaymentGatewayFailed => "Failed to create payment order",
            ErrorCode::TransactionBookingMismatch => "Transaction belongs to another booking",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Intake
            1001 => Ok(ErrorCode::InvalidEmail),
            1002 => Ok(ErrorCode::InvalidPhone),

            // Booking
            2001 => Ok(ErrorCode::BookingNotFound),
            2002 => Ok(ErrorCode::InvalidStayDates),
            2003 => Ok(ErrorCode::InvalidGuestCount),

            // Payment
            3001 => Ok(ErrorCode::PaymentNotFound),
            3002 => Ok(ErrorCode::PaymentGatewayFailed),
            3003 => Ok(ErrorCode::TransactionBookingMismatch),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
