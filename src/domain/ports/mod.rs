use crate::domain::models::{
    user::User, auth::SessionRecord, party_type::PartyType, service::Service,
    event_plan::EventPlan, booking::Booking, testimonial::Testimonial, contact::ContactMessage,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_session(&self, record: &SessionRecord) -> Result<(), AppError>;
    async fn find_session(&self, token_hash: &str) -> Result<Option<SessionRecord>, AppError>;
    async fn delete_session(&self, token_hash: &str) -> Result<(), AppError>;
    /// Removes every session that expired before `now`; returns how many.
    async fn delete_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}

#[async_trait]
pub trait PartyTypeRepository: Send + Sync {
    async fn create(&self, party_type: &PartyType) -> Result<PartyType, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PartyType>, AppError>;
    /// Newest first; `limit` bounds the preview lists.
    async fn list(&self, limit: Option<i64>) -> Result<Vec<PartyType>, AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, AppError>;
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Service>, AppError>;
    async fn list(&self) -> Result<Vec<Service>, AppError>;
}

#[async_trait]
pub trait EventPlanRepository: Send + Sync {
    /// Inserts the plan and its service links in one transaction.
    async fn create(&self, plan: &EventPlan, service_ids: &[String]) -> Result<EventPlan, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<EventPlan>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<EventPlan>, AppError>;
    async fn list_services(&self, plan_id: &str) -> Result<Vec<Service>, AppError>;
    async fn update_total(&self, plan_id: &str, total_cost: Decimal) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, user_id: &str, id: &str) -> Result<Option<Booking>, AppError>;
    async fn find_by_event_plan(&self, event_plan_id: &str) -> Result<Option<Booking>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError>;
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn create(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError>;
    async fn list(&self, limit: Option<i64>) -> Result<Vec<Testimonial>, AppError>;
    async fn list_by_party_type(&self, party_type_id: &str) -> Result<Vec<Testimonial>, AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage, AppError>;
}
