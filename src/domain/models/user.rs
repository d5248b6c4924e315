use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Accounts are keyed by e-mail; the username mirrors it.
    pub fn new(email: String, first_name: String, last_name: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: email.clone(),
            email,
            first_name,
            last_name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() { &self.username } else { &self.first_name }
    }
}
