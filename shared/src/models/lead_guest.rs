//! Lead guest model
//!
//! The lead guest is the primary contact for a party, registered before
//! check-in together with an optional link to an uploaded ID image.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{optional_text, require_email, require_phone, require_text};

/// Lead guest row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LeadGuest {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub id_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create lead guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadGuestCreate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub id_image_url: Option<String>,
}

/// Validated lead guest, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeadGuest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub id_image_url: Option<String>,
}

impl LeadGuestCreate {
    pub fn validate(self) -> AppResult<NewLeadGuest> {
        Ok(NewLeadGuest {
            first_name: require_text(
                self.first_name.as_deref(),
                "firstName",
                "First name is required",
            )?,
            last_name: require_text(
                self.last_name.as_deref(),
                "lastName",
                "Last name is required",
            )?,
            email: require_email(self.email.as_deref())?,
            phone: require_phone(self.phone.as_deref())?,
            id_image_url: optional_text(self.id_image_url.as_deref()),
        })
    }
}
