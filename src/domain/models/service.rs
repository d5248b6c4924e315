use serde::{Deserialize, Serialize};
use uuid::Uuid;
use rust_decimal::Decimal;
use crate::error::AppError;

/// An add-on priced independently of the party type.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub icon: String,
    pub image: Option<String>,
}

impl Service {
    pub fn new(name: String, description: String, price: Decimal) -> Result<Self, AppError> {
        if price < Decimal::ZERO {
            return Err(AppError::Validation("Service price cannot be negative".into()));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            price,
            icon: "star".to_string(),
            image: None,
        })
    }
}
