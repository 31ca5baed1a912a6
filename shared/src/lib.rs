//! Shared types for the stay backend
//!
//! Error codes and the API error envelope, request/response models,
//! field validation and amount-unit handling. Used by the server and by
//! anything that talks to it.

pub mod error;
pub mod models;
pub mod money;
pub mod validation;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use money::AmountConvention;
pub use serde::{Deserialize, Serialize};
