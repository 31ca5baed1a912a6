//! Contact inquiry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{optional_text, require_email, require_phone, require_text};

/// Contact inquiry row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create contact payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
}

/// Validated contact, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: Option<String>,
}

impl ContactCreate {
    pub fn validate(self) -> AppResult<NewContact> {
        Ok(NewContact {
            name: require_text(self.name.as_deref(), "name", "Name is required")?,
            email: require_email(self.email.as_deref())?,
            phone: require_phone(self.phone.as_deref())?,
            description: optional_text(self.description.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn payload() -> ContactCreate {
        ContactCreate {
            name: Some(" Asha ".into()),
            email: Some("Asha@Example.com".into()),
            phone: Some("+911234567890".into()),
            description: Some("  ".into()),
        }
    }

    #[test]
    fn test_validate_normalizes() {
        let c = payload().validate().unwrap();
        assert_eq!(c.name, "Asha");
        assert_eq!(c.email, "asha@example.com");
        assert_eq!(c.description, None);
    }

    #[test]
    fn test_validate_rejects_in_order() {
        let mut p = payload();
        p.name = None;
        p.email = Some("bad".into());
        assert_eq!(p.validate().unwrap_err().code, ErrorCode::RequiredField);

        let mut p = payload();
        p.email = Some("bad".into());
        p.phone = Some("1".into());
        assert_eq!(p.validate().unwrap_err().code, ErrorCode::InvalidEmail);

        let mut p = payload();
        p.phone = Some("12345".into());
        assert_eq!(p.validate().unwrap_err().code, ErrorCode::InvalidPhone);
    }
}
