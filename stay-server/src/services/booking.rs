//! Booking workflow

use shared::error::{AppError, ErrorCode};
use shared::models::{Booking, BookingCreate, BookingCreated};
use sqlx::PgPool;

use crate::db::bookings::{self, Confirmation};
use crate::error::ServiceResult;

/// Largest page the list endpoint serves
pub const MAX_LIST_LIMIT: i64 = 500;

#[derive(Debug, Clone)]
pub struct BookingService {
    pool: PgPool,
}

impl BookingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: BookingCreate) -> ServiceResult<BookingCreated> {
        let booking = payload.validate()?;
        let (booking_id, amount) = bookings::create(&self.pool, &booking).await?;

        tracing::info!(
            booking_id,
            check_in = %booking.check_in,
            check_out = %booking.check_out,
            guests = booking.guests,
            "Booking created"
        );
        Ok(BookingCreated { booking_id, amount })
    }

    /// Newest first, optionally capped at `limit` rows.
    pub async fn list(&self, limit: Option<i64>) -> ServiceResult<Vec<Booking>> {
        if let Some(limit) = limit.filter(|l| !(1..=MAX_LIST_LIMIT).contains(l)) {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!("limit must be between 1 and {MAX_LIST_LIMIT}"),
            )
            .with_detail("field", "limit")
            .with_detail("value", limit)
            .into());
        }
        Ok(bookings::list(&self.pool, limit).await?)
    }

    /// Mark the booking paid and settle the named payment, atomically.
    ///
    /// Repeating the call with the same arguments leaves the same state. A
    /// transaction issued for another booking is refused and nothing changes.
    pub async fn confirm_payment(
        &self,
        booking_id: i32,
        transaction_id: Option<&str>,
    ) -> ServiceResult<()> {
        match bookings::confirm_payment(&self.pool, booking_id, transaction_id).await? {
            Confirmation::Confirmed => {
                tracing::info!(booking_id, transaction_id, "Booking payment confirmed");
                Ok(())
            }
            Confirmation::BookingMissing => Err(AppError::new(ErrorCode::BookingNotFound)
                .with_detail("bookingId", booking_id)
                .into()),
            Confirmation::ForeignTransaction { owner } => {
                tracing::warn!(
                    booking_id,
                    owner,
                    transaction_id,
                    "Refused confirmation with another booking's transaction"
                );
                Err(AppError::new(ErrorCode::TransactionBookingMismatch)
                    .with_detail("bookingId", booking_id)
                    .with_detail("transactionId", transaction_id.unwrap_or_default())
                    .into())
            }
        }
    }
}
