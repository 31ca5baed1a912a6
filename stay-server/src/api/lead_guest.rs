//! Lead guest endpoints

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use shared::models::{Created, Items, LeadGuest, LeadGuestCreate};

use super::{ApiJson, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/lead-guest", get(list).post(create))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LeadGuestCreate>,
) -> ApiResult<Created> {
    Ok(Json(state.intake.create_lead_guest(payload).await?))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Items<LeadGuest>> {
    Ok(Json(Items::ok(state.intake.recent_lead_guests().await?)))
}
