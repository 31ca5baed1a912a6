//! Concierge chat endpoint
//!
//! Always answers 200; an unreadable body gets an apology instead of an error.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use shared::models::{ChatReply, ChatRequest};

use crate::services::concierge;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

pub async fn chat(body: Result<Json<ChatRequest>, JsonRejection>) -> Json<ChatReply> {
    let reply = match body {
        Ok(Json(request)) => concierge::reply(&request),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable chat request");
            concierge::APOLOGY
        }
    };
    Json(ChatReply {
        reply: reply.to_string(),
    })
}
