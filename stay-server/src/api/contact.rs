//! Contact inquiry endpoints

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use shared::models::{Contact, ContactCreate, Created, Items};

use super::{ApiJson, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", get(list).post(create))
}

/// POST /contact
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ContactCreate>,
) -> ApiResult<Created> {
    Ok(Json(state.intake.create_contact(payload).await?))
}

/// GET /contact - latest 100
pub async fn list(State(state): State<AppState>) -> ApiResult<Items<Contact>> {
    Ok(Json(Items::ok(state.intake.recent_contacts().await?)))
}
