use std::sync::Arc;
use crate::domain::ports::{
    BookingRepository, ContactRepository, EventPlanRepository,
    PartyTypeRepository, ServiceRepository, TestimonialRepository, UserRepository,
};
use crate::domain::services::{auth_service::AuthService, pricing::PricingService};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub party_type_repo: Arc<dyn PartyTypeRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub event_plan_repo: Arc<dyn EventPlanRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub testimonial_repo: Arc<dyn TestimonialRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub auth_service: Arc<AuthService>,
    pub pricing_service: Arc<PricingService>,
    pub templates: Arc<Tera>,
}
