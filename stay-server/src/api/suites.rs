//! Static suite catalog

use axum::routing::get;
use axum::{Json, Router};
use shared::models::{Items, SUITES, Suite};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/suites", get(list))
}

pub async fn list() -> Json<Items<Suite>> {
    Json(Items::new(SUITES.to_vec()))
}
