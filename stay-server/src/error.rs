//! Unified service-layer error type for stay-server
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`) and
//! gateway failures to the API-layer error (`AppError`), so services can use
//! `?` and handlers get the right status code without per-call mapping.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

use crate::BoxError;
use crate::razorpay::GatewayError;

/// Service-layer error
///
/// - `Db`: Database/infrastructure errors (logged, generic message to the client)
/// - `Gateway`: Payment processor failures (logged with status and body)
/// - `App`: Business-rule errors (transparent pass-through to client)
#[derive(Debug)]
pub enum ServiceError {
    /// Database or infrastructure error
    Db(BoxError),
    /// Payment gateway call failed
    Gateway(GatewayError),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<GatewayError> for ServiceError {
    fn from(e: GatewayError) -> Self {
        ServiceError::Gateway(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
            ServiceError::Gateway(gw_err) => {
                tracing::error!(
                    status = ?gw_err.status(),
                    body = gw_err.body().unwrap_or_default(),
                    retryable = gw_err.is_retryable(),
                    error = %gw_err,
                    "Payment gateway error"
                );
                AppError::new(ErrorCode::PaymentGatewayFailed)
                    .with_detail("retryable", gw_err.is_retryable())
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
