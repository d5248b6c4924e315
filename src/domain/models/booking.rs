use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub const CONFIRMATION_CODE_LEN: usize = 8;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status '{}'", other)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub event_plan_id: String,
    pub status: BookingStatus,
    pub payment_amount: Decimal,
    pub advance_payment: Decimal,
    pub is_paid: bool,
    pub booking_date: DateTime<Utc>,
    pub confirmation_code: String,
}

pub struct NewBookingParams {
    pub user_id: String,
    pub event_plan_id: String,
    pub status: BookingStatus,
    pub payment_amount: Decimal,
    pub advance_payment: Decimal,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            event_plan_id: params.event_plan_id,
            status: params.status,
            payment_amount: params.payment_amount,
            advance_payment: params.advance_payment,
            is_paid: false,
            booking_date: Utc::now(),
            confirmation_code: generate_confirmation_code(),
        }
    }
}

/// First eight hex digits of a random UUID, uppercased.
pub fn generate_confirmation_code() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(CONFIRMATION_CODE_LEN)
        .collect::<String>()
        .to_uppercase()
}
