//! Payment model
//!
//! A payment row is one attempt to pay for a booking. Status moves from
//! `PENDING` to `SUCCESS` when the booking is confirmed; nothing moves it back.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::validation::{coerce_id, optional_text};

/// The only currency the service handles
pub const CURRENCY_INR: &str = "INR";

/// Payment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Success,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
        }
    }

    /// Parse the stored column value. Unknown strings read as `Pending`.
    pub fn from_db(s: &str) -> Self {
        match s {
            "SUCCESS" => Self::Success,
            _ => Self::Pending,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the guest pays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Hosted card checkout
    Card,
    /// UPI intent rendered as a QR image
    UpiQr,
    /// Anything else is stored verbatim with no gateway work
    Other(String),
}

impl PaymentMethod {
    pub fn parse(s: &str) -> Self {
        match s {
            "card" => Self::Card,
            "upi_qr" => Self::UpiQr,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Card => "card",
            Self::UpiQr => "upi_qr",
            Self::Other(s) => s,
        }
    }

    /// Gateway used when the request names none.
    pub fn default_gateway(&self) -> &'static str {
        match self {
            Self::Card => "razorpay",
            _ => "upi",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub transaction_id: String,
    pub booking_id: i32,
    pub method: String,
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub gateway: String,
    pub gateway_order_id: Option<String>,
    pub qr_image_url: Option<String>,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn status(&self) -> PaymentStatus {
        PaymentStatus::from_db(&self.status)
    }
}

/// Create payment order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderCreate {
    pub booking_id: Option<Value>,
    pub method: Option<String>,
    pub gateway: Option<String>,
}

/// Validated order request
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrderRequest {
    pub booking_id: i32,
    pub method: PaymentMethod,
    pub gateway: String,
}

impl PaymentOrderCreate {
    pub fn validate(self) -> AppResult<PaymentOrderRequest> {
        let booking_id = self
            .booking_id
            .as_ref()
            .and_then(coerce_id)
            .ok_or_else(|| AppError::required("bookingId", "bookingId required"))?;
        let method = optional_text(self.method.as_deref())
            .map(|m| PaymentMethod::parse(&m))
            .ok_or_else(|| AppError::required("method", "method required"))?;
        let gateway = optional_text(self.gateway.as_deref())
            .unwrap_or_else(|| method.default_gateway().to_string());

        Ok(PaymentOrderRequest {
            booking_id,
            method,
            gateway,
        })
    }
}

/// `notes` object sent to the gateway and echoed to the checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNotes {
    pub booking_id: String,
}

/// What the card checkout widget needs to open
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDescriptor {
    pub key_id: String,
    pub order_id: String,
    pub currency: String,
    pub notes: OrderNotes,
}

/// Reply to a payment order create
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub transaction_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay: Option<CheckoutDescriptor>,
}

/// Reply to a status poll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentStatusReply {
    pub status: PaymentStatus,
}
