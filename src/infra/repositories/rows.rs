//! Storage-side shapes for entities carrying money. Amounts live in `*_cents`
//! integer columns and are converted to `Decimal` at the repository boundary.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use crate::domain::models::{
    booking::Booking,
    event_plan::EventPlan,
    money::from_cents,
    party_type::PartyType,
    service::Service,
};
use crate::error::AppError;

#[derive(Debug, FromRow)]
pub struct PartyTypeRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_price_cents: i64,
    pub image: Option<String>,
    pub duration_hours: i32,
    pub max_guests: i32,
    pub created_at: DateTime<Utc>,
}

impl From<PartyTypeRow> for PartyType {
    fn from(row: PartyTypeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            base_price: from_cents(row.base_price_cents),
            image: row.image,
            duration_hours: row.duration_hours,
            max_guests: row.max_guests,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ServiceRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub icon: String,
    pub image: Option<String>,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: from_cents(row.price_cents),
            icon: row.icon,
            image: row.image,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct EventPlanRow {
    pub id: String,
    pub user_id: String,
    pub party_type_id: Option<String>,
    pub guest_count: i32,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub special_requests: String,
    pub total_cost_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventPlanRow> for EventPlan {
    fn from(row: EventPlanRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            party_type_id: row.party_type_id,
            guest_count: row.guest_count,
            event_date: row.event_date,
            event_time: row.event_time,
            venue: row.venue,
            special_requests: row.special_requests,
            total_cost: from_cents(row.total_cost_cents),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct BookingRow {
    pub id: String,
    pub user_id: String,
    pub event_plan_id: String,
    pub status: String,
    pub payment_amount_cents: i64,
    pub advance_payment_cents: i64,
    pub is_paid: bool,
    pub booking_date: DateTime<Utc>,
    pub confirmation_code: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Self {
            status: row.status.parse().map_err(AppError::InternalWithMsg)?,
            id: row.id,
            user_id: row.user_id,
            event_plan_id: row.event_plan_id,
            payment_amount: from_cents(row.payment_amount_cents),
            advance_payment: from_cents(row.advance_payment_cents),
            is_paid: row.is_paid,
            booking_date: row.booking_date,
            confirmation_code: row.confirmation_code,
        })
    }
}

pub fn into_bookings(rows: Vec<BookingRow>) -> Result<Vec<Booking>, AppError> {
    rows.into_iter().map(Booking::try_from).collect()
}

pub const PARTY_TYPE_COLUMNS: &str = "id, name, description, base_price_cents, image, duration_hours, max_guests, created_at";
pub const SERVICE_COLUMNS: &str = "id, name, description, price_cents, icon, image";
pub const EVENT_PLAN_COLUMNS: &str = "id, user_id, party_type_id, guest_count, event_date, event_time, venue, special_requests, total_cost_cents, created_at, updated_at";
pub const BOOKING_COLUMNS: &str = "id, user_id, event_plan_id, status, payment_amount_cents, advance_payment_cents, is_paid, booking_date, confirmation_code";
