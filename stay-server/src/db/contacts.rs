//! Contact inquiry operations

use chrono::{DateTime, Utc};
use shared::models::{Contact, NewContact};
use sqlx::PgPool;

/// Insert a contact, returning `(id, created_at)`
pub async fn create(
    pool: &PgPool,
    contact: &NewContact,
) -> Result<(i32, DateTime<Utc>), sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO contacts (name, email, phone, description) VALUES ($1, $2, $3, $4) RETURNING id, created_at",
    )
    .bind(&contact.name)
    .bind(&contact.email)
    .bind(&contact.phone)
    .bind(&contact.description)
    .fetch_one(pool)
    .await
}

/// Most recent contacts first
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Contact>, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "SELECT id, name, email, phone, description, created_at FROM contacts ORDER BY created_at DESC, id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
