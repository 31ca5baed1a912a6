//! Payment operations

use rust_decimal::Decimal;
use shared::models::{CURRENCY_INR, Payment, PaymentStatus};
use sqlx::PgPool;

/// Row to insert for a new payment attempt
#[derive(Debug, Clone)]
pub struct NewPayment<'a> {
    pub transaction_id: &'a str,
    pub booking_id: i32,
    pub method: &'a str,
    pub amount: Decimal,
    pub gateway: &'a str,
    pub gateway_order_id: Option<&'a str>,
    pub qr_image_url: Option<&'a str>,
}

/// Insert a PENDING payment
pub async fn create(pool: &PgPool, payment: &NewPayment<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO payments (transaction_id, booking_id, method, status, amount, gateway, gateway_order_id, qr_image_url, currency) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
    )
    .bind(payment.transaction_id)
    .bind(payment.booking_id)
    .bind(payment.method)
    .bind(PaymentStatus::Pending.as_str())
    .bind(payment.amount)
    .bind(payment.gateway)
    .bind(payment.gateway_order_id)
    .bind(payment.qr_image_url)
    .bind(CURRENCY_INR)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_transaction_id(
    pool: &PgPool,
    transaction_id: &str,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        "SELECT transaction_id, booking_id, method, status, amount, gateway, gateway_order_id, qr_image_url, currency, created_at, updated_at \
         FROM payments WHERE transaction_id = $1",
    )
    .bind(transaction_id)
    .fetch_optional(pool)
    .await
}
