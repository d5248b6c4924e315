use serde::Serialize;
use crate::domain::models::{booking::Booking, event_plan::EventPlan};

/// Dashboard row for one event plan.
#[derive(Serialize)]
pub struct PlanSummary {
    pub plan: EventPlan,
    pub party_type_name: Option<String>,
    pub booking_id: Option<String>,
}

#[derive(Serialize)]
pub struct BookingSummary {
    pub booking: Booking,
    pub party_type_name: Option<String>,
    pub event_date: Option<String>,
}
