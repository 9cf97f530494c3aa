use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::{ModelManager, Result};
use crate::web::data::ValidContact;

/// One persisted contact submission. Append-only: rows are never updated or
/// deleted by this service.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Signup {
    pub id: i32,
    pub contact_info: String,
    pub signup_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ModelManager {
    /// Writes one signup row, letting the database assign `id` and both
    /// timestamps, and returns the full persisted record.
    pub async fn insert_signup(&self, contact: &ValidContact) -> Result<Signup> {
        let signup = sqlx::query_as::<_, Signup>(
            r#"INSERT INTO marketing_signups (contact_info)
               VALUES ($1)
               RETURNING id, contact_info, signup_date, created_at"#,
        )
        .bind(contact.as_ref())
        .fetch_one(self.db())
        .await?;

        Ok(signup)
    }

    /// Returns every signup, newest first. The whole table, no pagination.
    pub async fn list_signups(&self) -> Result<Vec<Signup>> {
        let signups = sqlx::query_as::<_, Signup>(
            r#"SELECT id, contact_info, signup_date, created_at
               FROM marketing_signups
               ORDER BY created_at DESC"#,
        )
        .fetch_all(self.db())
        .await?;

        Ok(signups)
    }
}
