//! Health check endpoint

use axum::Router;
use axum::routing::get;

use super::ApiResult;
use crate::state::AppState;
use shared::models::Ack;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

pub async fn health_check() -> ApiResult<Ack> {
    Ok(axum::Json(Ack::ok()))
}
