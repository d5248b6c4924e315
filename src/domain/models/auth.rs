use serde::Serialize;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow, Clone)]
pub struct SessionRecord {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Signed-in user as exposed to templates.
#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
}
