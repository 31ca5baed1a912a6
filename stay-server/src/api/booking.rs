//! Booking endpoints

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use shared::error::AppError;
use shared::models::{
    Ack, Booking, BookingCreate, BookingCreated, BookingListQuery, ConfirmPayment, Items,
};
use shared::validation::coerce_id;

use super::{ApiJson, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/booking", get(list).post(create))
        .route("/booking/{booking_id}/confirmPayment", put(confirm_payment))
}

/// GET /booking?limit=
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<BookingListQuery>, QueryRejection>,
) -> ApiResult<Items<Booking>> {
    let Query(query) = query?;
    Ok(Json(Items::new(state.bookings.list(query.limit).await?)))
}

/// POST /booking
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BookingCreate>,
) -> ApiResult<BookingCreated> {
    Ok(Json(state.bookings.create(payload).await?))
}

/// PUT /booking/{booking_id}/confirmPayment
///
/// The body is optional; an empty one confirms without a transaction id.
pub async fn confirm_payment(
    State(state): State<AppState>,
    Path(booking_id): Path<String>,
    body: Bytes,
) -> ApiResult<Ack> {
    let booking_id = coerce_id(&serde_json::Value::String(booking_id))
        .ok_or_else(|| AppError::validation("bookingId must be a positive integer"))?;
    let payload: ConfirmPayment = if body.iter().all(u8::is_ascii_whitespace) {
        ConfirmPayment::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| AppError::invalid_request(format!("Invalid JSON body: {e}")))?
    };
    let transaction_id = payload.transaction_id();

    state
        .bookings
        .confirm_payment(booking_id, transaction_id.as_deref())
        .await?;
    Ok(Json(Ack::ok()))
}
