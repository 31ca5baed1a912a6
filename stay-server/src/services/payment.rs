//! Payment orders and status
//!
//! An order is created against the amount stored on the booking, never an
//! amount from the request. UPI QR orders are built locally; card orders go
//! through Razorpay. Every order leaves one PENDING payment row behind.

use shared::error::{AppError, ErrorCode};
use shared::models::{
    CURRENCY_INR, CheckoutDescriptor, OrderNotes, PaymentMethod, PaymentOrder,
    PaymentOrderCreate, PaymentStatus,
};
use shared::money::AmountConvention;
use sqlx::PgPool;

use crate::config::RazorpayConfig;
use crate::db::payments::NewPayment;
use crate::db::{bookings, payments};
use crate::error::ServiceResult;
use crate::razorpay::{Credentials, OrderRequest, RazorpayClient};
use crate::upi::UpiPayee;

const RAZORPAY: &str = "razorpay";

/// `txn_` followed by 16 lowercase hex digits from the thread CSPRNG
pub fn generate_transaction_id() -> String {
    let bytes: [u8; 8] = rand::random();
    format!("txn_{}", hex::encode(bytes))
}

#[derive(Debug, Clone)]
pub struct PaymentService {
    pool: PgPool,
    razorpay: RazorpayClient,
    key_id: Option<String>,
    key_secret: Option<String>,
    upi: UpiPayee,
    convention: AmountConvention,
}

impl PaymentService {
    pub fn new(
        pool: PgPool,
        razorpay: RazorpayClient,
        razorpay_config: &RazorpayConfig,
        upi: UpiPayee,
        convention: AmountConvention,
    ) -> Self {
        Self {
            pool,
            razorpay,
            key_id: razorpay_config.key_id.clone(),
            key_secret: razorpay_config.key_secret.clone(),
            upi,
            convention,
        }
    }

    /// Both Razorpay keys, or a configuration error naming the missing ones.
    fn credentials(&self) -> Result<Credentials, AppError> {
        match (&self.key_id, &self.key_secret) {
            (Some(key_id), Some(key_secret)) => Ok(Credentials {
                key_id: key_id.clone(),
                key_secret: key_secret.clone(),
            }),
            (key_id, key_secret) => {
                let mut missing = Vec::new();
                if key_id.is_none() {
                    missing.push("RAZORPAY_KEY_ID");
                }
                if key_secret.is_none() {
                    missing.push("RAZORPAY_KEY_SECRET");
                }
                tracing::error!(missing = ?missing, "Razorpay keys not configured");
                Err(AppError::config("Razorpay keys not configured").with_detail("missing", missing))
            }
        }
    }

    pub async fn create_order(&self, payload: PaymentOrderCreate) -> ServiceResult<PaymentOrder> {
        let request = payload.validate()?;
        let booking_id = request.booking_id;

        let booking = bookings::find_by_id(&self.pool, booking_id)
            .await?
            .ok_or_else(|| {
                AppError::new(ErrorCode::BookingNotFound).with_detail("bookingId", booking_id)
            })?;
        let amount = booking.amount;
        let transaction_id = generate_transaction_id();

        let mut qr_image_url = None;
        let mut gateway_order_id = None;
        let mut checkout = None;

        match (&request.method, request.gateway.as_str()) {
            (PaymentMethod::UpiQr, _) => {
                let intent = self.upi.intent(
                    &self.convention.major_display(amount),
                    booking_id,
                    &transaction_id,
                );
                qr_image_url = Some(self.upi.qr_image_url(&intent));
                gateway_order_id = Some(transaction_id.clone());
            }
            (PaymentMethod::Card, RAZORPAY) => {
                let credentials = self.credentials()?;
                let minor = self.convention.to_gateway_minor(amount).ok_or_else(|| {
                    AppError::with_message(
                        ErrorCode::ValueOutOfRange,
                        "Booking amount is too large for the gateway",
                    )
                })?;
                let notes = OrderNotes {
                    booking_id: booking_id.to_string(),
                };
                let order = self
                    .razorpay
                    .create_order(
                        &credentials,
                        &OrderRequest {
                            amount: minor,
                            currency: CURRENCY_INR,
                            receipt: booking_id.to_string(),
                            notes: &notes,
                            payment_capture: 1,
                        },
                    )
                    .await?;

                checkout = Some(CheckoutDescriptor {
                    key_id: credentials.key_id,
                    order_id: order.id.clone(),
                    currency: CURRENCY_INR.to_string(),
                    notes,
                });
                gateway_order_id = Some(order.id);
            }
            _ => {}
        }

        payments::create(
            &self.pool,
            &NewPayment {
                transaction_id: &transaction_id,
                booking_id,
                method: request.method.as_str(),
                amount,
                gateway: &request.gateway,
                gateway_order_id: gateway_order_id.as_deref(),
                qr_image_url: qr_image_url.as_deref(),
            },
        )
        .await?;

        tracing::info!(
            booking_id,
            transaction_id = %transaction_id,
            method = %request.method,
            gateway = %request.gateway,
            "Payment order created"
        );

        Ok(PaymentOrder {
            transaction_id,
            amount,
            qr_image_url,
            razorpay: checkout,
        })
    }

    pub async fn status(&self, transaction_id: &str) -> ServiceResult<PaymentStatus> {
        let payment = payments::find_by_transaction_id(&self.pool, transaction_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::PaymentNotFound))?;
        Ok(payment.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpiConfig;
    use std::time::Duration;

    fn service(key_id: Option<&str>, key_secret: Option<&str>) -> PaymentService {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://localhost/stay_test")
            .unwrap();
        let config = RazorpayConfig {
            key_id: key_id.map(String::from),
            key_secret: key_secret.map(String::from),
            api_base: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(1),
        };
        let upi = UpiPayee::new(&UpiConfig {
            payee_vpa: "yourvpa@bank".into(),
            payee_name: "LuxuryStay".into(),
            qr_service_url: "https://api.qrserver.com/v1/create-qr-code/".into(),
        });
        let client = RazorpayClient::new(&config.api_base, config.timeout).unwrap();
        PaymentService::new(pool, client, &config, upi, AmountConvention::Auto)
    }

    #[test]
    fn test_transaction_id_format() {
        let id = generate_transaction_id();
        assert_eq!(id.len(), 20);
        assert!(id.starts_with("txn_"));
        assert!(
            id[4..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
        assert_ne!(id, generate_transaction_id());
    }

    #[tokio::test]
    async fn test_credentials_missing_lists_variables() {
        let err = service(None, None).credentials().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(
            err.details.unwrap()["missing"],
            serde_json::json!(["RAZORPAY_KEY_ID", "RAZORPAY_KEY_SECRET"])
        );

        let err = service(Some("rzp_test_key"), None).credentials().unwrap_err();
        assert_eq!(
            err.details.unwrap()["missing"],
            serde_json::json!(["RAZORPAY_KEY_SECRET"])
        );

        let creds = service(Some("rzp_test_key"), Some("secret")).credentials().unwrap();
        assert_eq!(creds.key_id, "rzp_test_key");
    }

    #[tokio::test]
    async fn test_create_order_validates_before_storage() {
        let err = service(None, None)
            .create_order(PaymentOrderCreate {
                booking_id: None,
                method: Some("card".into()),
                gateway: None,
            })
            .await
            .unwrap_err();
        let err: AppError = err.into();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }
}
