use axum::{extract::State, response::Html};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tower_cookies::Cookies;
use crate::api::dtos::responses::{BookingSummary, PlanSummary};
use crate::api::extractors::auth::AuthUser;
use crate::api::render::{page_context, render};
use crate::error::AppError;
use crate::state::AppState;

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    let plans = state.event_plan_repo.list_by_user(&user.id).await?;
    let bookings = state.booking_repo.list_by_user(&user.id).await?;

    let party_names: HashMap<String, String> = state.party_type_repo.list(None).await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    let booking_by_plan: HashMap<&str, &str> = bookings.iter()
        .map(|b| (b.event_plan_id.as_str(), b.id.as_str()))
        .collect();

    let total_spent: Decimal = bookings.iter().map(|b| b.payment_amount).sum();

    let booking_rows: Vec<BookingSummary> = bookings.iter()
        .map(|booking| {
            let plan = plans.iter().find(|p| p.id == booking.event_plan_id);
            BookingSummary {
                booking: booking.clone(),
                party_type_name: plan
                    .and_then(|p| p.party_type_id.as_ref())
                    .and_then(|id| party_names.get(id).cloned()),
                event_date: plan.map(|p| p.event_date.format("%B %-d, %Y").to_string()),
            }
        })
        .collect();

    let plan_rows: Vec<PlanSummary> = plans.iter()
        .map(|plan| PlanSummary {
            party_type_name: plan.party_type_id.as_ref().and_then(|id| party_names.get(id).cloned()),
            booking_id: booking_by_plan.get(plan.id.as_str()).map(|id| id.to_string()),
            plan: plan.clone(),
        })
        .collect();

    let mut context = page_context(Some(&user), &cookies);
    context.insert("plans", &plan_rows);
    context.insert("bookings", &booking_rows);
    context.insert("total_spent", &total_spent.round_dp(2));
    render(&state, "dashboard.html", &context)
}
