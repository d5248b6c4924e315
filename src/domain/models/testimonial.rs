use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub party_type_id: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn new(name: String, party_type_id: Option<String>, rating: i32, comment: String) -> Result<Self, AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation("Rating must be between 1 and 5".into()));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            party_type_id,
            rating,
            comment,
            image: None,
            created_at: Utc::now(),
        })
    }
}
