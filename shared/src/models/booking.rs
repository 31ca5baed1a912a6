//! Booking model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{
    coerce_id, coerce_number, optional_text, require_date, require_email, require_phone,
    require_text,
};

/// Booking row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub room_type: Option<String>,
    pub notes: Option<String>,
    /// Stored as sent; unit interpretation is [`crate::money::AmountConvention`]'s job
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub paid: bool,
    /// Transaction that confirmed the booking
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create booking payload
///
/// `guests` and `amount` arrive as numbers or numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<Value>,
    pub room_type: Option<String>,
    pub notes: Option<String>,
    pub amount: Option<Value>,
}

/// Validated booking, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub room_type: Option<String>,
    pub notes: Option<String>,
    pub amount: Decimal,
}

impl BookingCreate {
    pub fn validate(self) -> AppResult<NewBooking> {
        let name = require_text(self.name.as_deref(), "name", "Name is required")?;
        let email = require_email(self.email.as_deref())?;
        let phone = require_phone(self.phone.as_deref())?;

        let check_in = require_date(self.check_in.as_deref(), "checkIn")?;
        let check_out = require_date(self.check_out.as_deref(), "checkOut")?;
        if check_out < check_in {
            return Err(AppError::with_message(
                ErrorCode::InvalidStayDates,
                "checkOut must not be before checkIn",
            )
            .with_detail("field", "checkOut"));
        }

        let guests = self
            .guests
            .as_ref()
            .and_then(coerce_id)
            .ok_or_else(|| AppError::new(ErrorCode::InvalidGuestCount).with_detail("field", "guests"))?;

        Ok(NewBooking {
            name,
            email,
            phone,
            check_in,
            check_out,
            guests,
            room_type: optional_text(self.room_type.as_deref()),
            notes: optional_text(self.notes.as_deref()),
            amount: parse_amount(self.amount.as_ref())?,
        })
    }
}

/// Absent or non-numeric amounts read as zero; negatives are refused.
fn parse_amount(value: Option<&Value>) -> AppResult<Decimal> {
    let Some(n) = value.and_then(coerce_number) else {
        return Ok(Decimal::ZERO);
    };
    if n < 0.0 {
        return Err(
            AppError::with_message(ErrorCode::ValueOutOfRange, "amount must not be negative")
                .with_detail("field", "amount"),
        );
    }
    Decimal::from_f64(n).ok_or_else(|| {
        AppError::with_message(ErrorCode::ValueOutOfRange, "amount is too large")
            .with_detail("field", "amount")
    })
}

/// Reply to a successful booking create
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreated {
    pub booking_id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Query string for the booking list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingListQuery {
    pub limit: Option<i64>,
}

/// Confirm payment payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPayment {
    pub transaction_id: Option<String>,
}

impl ConfirmPayment {
    /// Blank ids count as absent.
    pub fn transaction_id(&self) -> Option<String> {
        optional_text(self.transaction_id.as_deref())
    }
}
