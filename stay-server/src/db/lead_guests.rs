//! Lead guest operations

use chrono::{DateTime, Utc};
use shared::models::{LeadGuest, NewLeadGuest};
use sqlx::PgPool;

/// Insert a lead guest, returning `(id, created_at)`
pub async fn create(
    pool: &PgPool,
    guest: &NewLeadGuest,
) -> Result<(i32, DateTime<Utc>), sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO lead_guests (first_name, last_name, email, phone, id_image_url) VALUES ($1, $2, $3, $4, $5) RETURNING id, created_at",
    )
    .bind(&guest.first_name)
    .bind(&guest.last_name)
    .bind(&guest.email)
    .bind(&guest.phone)
    .bind(&guest.id_image_url)
    .fetch_one(pool)
    .await
}

pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<LeadGuest>, sqlx::Error> {
    sqlx::query_as::<_, LeadGuest>(
        "SELECT id, first_name, last_name, email, phone, id_image_url, created_at FROM lead_guests ORDER BY created_at DESC, id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
