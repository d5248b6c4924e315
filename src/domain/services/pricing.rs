use std::sync::Arc;
use crate::domain::{
    models::{event_plan::EventPlan, party_type::PartyType, service::Service},
    ports::{EventPlanRepository, PartyTypeRepository},
};
use crate::error::AppError;
use rust_decimal::Decimal;
use tracing::debug;

/// Share of the total collected up front when a booking is confirmed.
pub const ADVANCE_PAYMENT_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

pub fn services_total(services: &[Service]) -> Decimal {
    services.iter().map(|s| s.price).sum()
}

/// Base price of the party type (zero without one) plus every attached service.
pub fn plan_total(party_type: Option<&PartyType>, services: &[Service]) -> Decimal {
    let base = party_type.map(|p| p.base_price).unwrap_or(Decimal::ZERO);
    base + services_total(services)
}

pub fn advance_payment(total: Decimal) -> Decimal {
    (total * ADVANCE_PAYMENT_RATIO).round_dp(2)
}

pub struct PricingService {
    party_type_repo: Arc<dyn PartyTypeRepository>,
    event_plan_repo: Arc<dyn EventPlanRepository>,
}

impl PricingService {
    pub fn new(party_type_repo: Arc<dyn PartyTypeRepository>, event_plan_repo: Arc<dyn EventPlanRepository>) -> Self {
        Self { party_type_repo, event_plan_repo }
    }

    /// Recomputes the plan total from current prices and persists it. Nothing keeps
    /// the stored total in sync automatically; call this after changing the plan.
    pub async fn calculate_total(&self, plan: &mut EventPlan) -> Result<Decimal, AppError> {
        let party_type = match &plan.party_type_id {
            Some(id) => self.party_type_repo.find_by_id(id).await?,
            None => None,
        };
        let services = self.event_plan_repo.list_services(&plan.id).await?;

        let total = plan_total(party_type.as_ref(), &services);
        self.event_plan_repo.update_total(&plan.id, total).await?;

        debug!("Plan {} total recalculated: {}", plan.id, total);
        plan.total_cost = total;
        Ok(total)
    }
}
