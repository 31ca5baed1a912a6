//! Contact and lead-guest intake

use shared::models::{
    Contact, ContactCreate, Created, LeadGuest, LeadGuestCreate,
};
use sqlx::PgPool;

use crate::db::{contacts, lead_guests};
use crate::error::ServiceResult;

/// Rows returned by the intake list endpoints
pub const RECENT_LIMIT: i64 = 100;

#[derive(Debug, Clone)]
pub struct IntakeService {
    pool: PgPool,
}

impl IntakeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_contact(&self, payload: ContactCreate) -> ServiceResult<Created> {
        let contact = payload.validate()?;
        let (id, created_at) = contacts::create(&self.pool, &contact).await?;
        tracing::info!(contact_id = id, "Contact submitted");
        Ok(Created::new(id, created_at).with_message("Contact submitted"))
    }

    pub async fn recent_contacts(&self) -> ServiceResult<Vec<Contact>> {
        Ok(contacts::list_recent(&self.pool, RECENT_LIMIT).await?)
    }

    pub async fn create_lead_guest(&self, payload: LeadGuestCreate) -> ServiceResult<Created> {
        let guest = payload.validate()?;
        let (id, created_at) = lead_guests::create(&self.pool, &guest).await?;
        tracing::info!(lead_guest_id = id, "Lead guest registered");
        Ok(Created::new(id, created_at))
    }

    pub async fn recent_lead_guests(&self) -> ServiceResult<Vec<LeadGuest>> {
        Ok(lead_guests::list_recent(&self.pool, RECENT_LIMIT).await?)
    }
}
