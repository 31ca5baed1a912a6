//! Data models
//!
//! Request payloads, DB rows and response bodies for the stay API.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Every JSON body is camelCase.

pub mod booking;
pub mod chat;
pub mod contact;
pub mod lead_guest;
pub mod payment;
pub mod suite;

// Re-exports
pub use booking::*;
pub use chat::*;
pub use contact::*;
pub use lead_guest::*;
pub use payment::*;
pub use suite::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{ "ok": true }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Reply to a successful intake create
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub id: i32,
    pub created_at: DateTime<Utc>,
}

impl Created {
    pub fn new(id: i32, created_at: DateTime<Utc>) -> Self {
        Self {
            ok: true,
            message: None,
            id,
            created_at,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// List body, `{ "items": [...] }` with an optional `ok` flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { ok: None, items }
    }

    /// Same list, flagged `"ok": true`.
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            ok: Some(true),
            items,
        }
    }
}
