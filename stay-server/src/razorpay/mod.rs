//! Razorpay integration via REST API (no SDK dependency)
//!
//! Only order creation is needed: the hosted checkout completes the card
//! payment and the frontend reports back through booking confirmation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::models::OrderNotes;
use thiserror::Error;

/// Errors from talking to the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// DNS, connect, TLS or timeout failure
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx reply
    #[error("gateway rejected the request with status {status}")]
    Rejected { status: u16, body: String },
    /// 2xx reply without an order id
    #[error("gateway response has no order id")]
    MalformedResponse { body: String },
}

impl GatewayError {
    /// HTTP status returned by the gateway, if it answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Rejected { status, .. } => Some(*status),
            Self::MalformedResponse { .. } => None,
        }
    }

    /// Raw response body, if one was read.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::Rejected { body, .. } | Self::MalformedResponse { body } => Some(body),
        }
    }

    /// Worth retrying with backoff: transport failures, 429 and 5xx.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { status, .. } => *status == 429 || *status >= 500,
            Self::MalformedResponse { .. } => false,
        }
    }
}

/// API key pair
#[derive(Debug, Clone)]
pub struct Credentials {
    pub key_id: String,
    pub key_secret: String,
}

/// Body of `POST /v1/orders`
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest<'a> {
    /// Minor units
    pub amount: i64,
    pub currency: &'a str,
    pub receipt: String,
    pub notes: &'a OrderNotes,
    pub payment_capture: u8,
}

/// The part of the created order we keep
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: String,
}

/// Razorpay REST client
#[derive(Debug, Clone)]
pub struct RazorpayClient {
    http: reqwest::Client,
    api_base: String,
}

impl RazorpayClient {
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Create an order
    pub async fn create_order(
        &self,
        credentials: &Credentials,
        order: &OrderRequest<'_>,
    ) -> Result<Order, GatewayError> {
        let resp = self
            .http
            .post(format!("{}/v1/orders", self.api_base))
            .basic_auth(&credentials.key_id, Some(&credentials.key_secret))
            .json(order)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<Order>(&body) {
            Ok(order) if !order.id.is_empty() => Ok(order),
            _ => Err(GatewayError::MalformedResponse { body }),
        }
    }
}
