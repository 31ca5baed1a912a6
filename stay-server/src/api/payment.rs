//! Payment endpoints

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use shared::models::{PaymentOrder, PaymentOrderCreate, PaymentStatusReply};

use super::{ApiJson, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payment/order", post(create_order))
        .route("/payment/status/{transaction_id}", get(status))
}

/// POST /payment/order
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PaymentOrderCreate>,
) -> ApiResult<PaymentOrder> {
    Ok(Json(state.payments.create_order(payload).await?))
}

/// GET /payment/status/{transaction_id}
pub async fn status(
    State(state): State<AppState>,
    Path(transaction_id): Path<String>,
) -> ApiResult<PaymentStatusReply> {
    let status = state.payments.status(transaction_id.trim()).await?;
    Ok(Json(PaymentStatusReply { status }))
}
