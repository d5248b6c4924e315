use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::error::AppError;

pub const DEFAULT_DURATION_HOURS: i32 = 4;
pub const DEFAULT_MAX_GUESTS: i32 = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PartyType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_price: Decimal,
    pub image: Option<String>,
    pub duration_hours: i32,
    pub max_guests: i32,
    pub created_at: DateTime<Utc>,
}

impl PartyType {
    pub fn new(name: String, description: String, base_price: Decimal) -> Result<Self, AppError> {
        if base_price < Decimal::ZERO {
            return Err(AppError::Validation("Base price cannot be negative".into()));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            base_price,
            image: None,
            duration_hours: DEFAULT_DURATION_HOURS,
            max_guests: DEFAULT_MAX_GUESTS,
            created_at: Utc::now(),
        })
    }
}
