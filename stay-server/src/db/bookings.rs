//! Booking operations

use rust_decimal::Decimal;
use shared::models::{Booking, NewBooking};
use sqlx::PgPool;

const BOOKING_COLUMNS: &str = "id, name, email, phone, check_in, check_out, guests, room_type, notes, amount, paid, transaction_id, created_at";

/// Insert a booking, returning `(id, amount)` as stored
pub async fn create(pool: &PgPool, booking: &NewBooking) -> Result<(i32, Decimal), sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO bookings (name, email, phone, check_in, check_out, guests, room_type, notes, amount) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id, amount",
    )
    .bind(&booking.name)
    .bind(&booking.email)
    .bind(&booking.phone)
    .bind(booking.check_in)
    .bind(booking.check_out)
    .bind(booking.guests)
    .bind(&booking.room_type)
    .bind(&booking.notes)
    .bind(booking.amount)
    .fetch_one(pool)
    .await
}

/// Newest first; `None` returns every row
pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC, id DESC LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<Booking>, sqlx::Error> {
    sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Result of [`confirm_payment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    BookingMissing,
    /// The transaction belongs to `owner`; nothing was written
    ForeignTransaction { owner: i32 },
}

/// Mark a booking paid and, given a transaction id, flip that payment to SUCCESS.
///
/// Both writes commit together or not at all. A transaction id that names a
/// payment of another booking rolls everything back. An id with no payment
/// row is recorded on the booking as-is. A payment already in SUCCESS is left
/// untouched.
pub async fn confirm_payment(
    pool: &PgPool,
    id: i32,
    transaction_id: Option<&str>,
) -> Result<Confirmation, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        "UPDATE bookings SET paid = TRUE, transaction_id = COALESCE($2, transaction_id) WHERE id = $1",
    )
    .bind(id)
    .bind(transaction_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if updated == 0 {
        tx.rollback().await?;
        return Ok(Confirmation::BookingMissing);
    }

    if let Some(transaction_id) = transaction_id {
        let owner: Option<i32> = sqlx::query_scalar(
            "SELECT booking_id FROM payments WHERE transaction_id = $1 FOR UPDATE",
        )
        .bind(transaction_id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(owner) = owner.filter(|owner| *owner != id) {
            tx.rollback().await?;
            return Ok(Confirmation::ForeignTransaction { owner });
        }

        sqlx::query(
            "UPDATE payments SET status = 'SUCCESS', updated_at = NOW() \
             WHERE transaction_id = $1 AND status <> 'SUCCESS'",
        )
        .bind(transaction_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(Confirmation::Confirmed)
}
