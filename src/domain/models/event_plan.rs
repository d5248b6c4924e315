use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use crate::error::AppError;

pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 500;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventPlan {
    pub id: String,
    pub user_id: String,
    pub party_type_id: Option<String>,
    pub guest_count: i32,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub special_requests: String,
    pub total_cost: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewEventPlanParams {
    pub user_id: String,
    pub party_type_id: Option<String>,
    pub guest_count: i32,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub special_requests: String,
}

impl EventPlan {
    pub fn new(params: NewEventPlanParams) -> Result<Self, AppError> {
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&params.guest_count) {
            return Err(AppError::Validation(format!(
                "Guest count must be between {} and {}", MIN_GUESTS, MAX_GUESTS
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            user_id: params.user_id,
            party_type_id: params.party_type_id,
            guest_count: params.guest_count,
            event_date: params.event_date,
            event_time: params.event_time,
            venue: params.venue,
            special_requests: params.special_requests,
            total_cost: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(guest_count: i32) -> NewEventPlanParams {
        NewEventPlanParams {
            user_id: "u1".into(),
            party_type_id: None,
            guest_count,
            event_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            event_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            venue: "Hall".into(),
            special_requests: String::new(),
        }
    }

    #[test]
    fn test_guest_count_bounds() {
        assert!(EventPlan::new(params(1)).is_ok());
        assert!(EventPlan::new(params(500)).is_ok());
        assert!(matches!(EventPlan::new(params(0)), Err(AppError::Validation(_))));
        assert!(matches!(EventPlan::new(params(501)), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_new_plan_starts_at_zero_total() {
        let plan = EventPlan::new(params(10)).unwrap();
        assert_eq!(plan.total_cost, Decimal::ZERO);
        assert_eq!(plan.created_at, plan.updated_at);
    }
}
