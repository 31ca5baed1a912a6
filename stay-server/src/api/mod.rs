//! API routes for stay-server

pub mod booking;
pub mod chat;
pub mod contact;
pub mod health;
pub mod lead_guest;
pub mod payment;
pub mod suites;

use std::time::Duration;

use axum::Router;
use axum::extract::FromRequest;
use http::{HeaderName, HeaderValue, Method, StatusCode};
use shared::error::AppError;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

/// Handler result: bare JSON on success, error envelope on failure
pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// JSON body extractor whose rejections use the error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

const REQUEST_ID_HEADER: &str = "x-request-id";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// All routes, without middleware or state
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(contact::router())
        .merge(lead_guest::router())
        .merge(booking::router())
        .merge(payment::router())
        .merge(suites::router())
        .merge(chat::router())
}

/// Full application: routes at the root and under `/api`, plus middleware
pub fn create_router(state: AppState, cors_origin: &str) -> Router {
    Router::new()
        .merge(build_router())
        .nest("/api", build_router())
        .layer(cors_layer(cors_origin))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}

/// `*` allows any origin; anything else is a single exact origin.
fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = match origin {
        "*" => AllowOrigin::from(Any),
        exact => match HeaderValue::from_str(exact) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!(origin = exact, "Invalid CORS_ORIGIN, allowing any origin");
                AllowOrigin::from(Any)
            }
        },
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
}
