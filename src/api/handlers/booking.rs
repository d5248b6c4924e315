use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;
use crate::api::extractors::auth::AuthUser;
use crate::api::flash;
use crate::api::render::{page_context, render};
use crate::domain::models::{
    booking::{generate_confirmation_code, Booking, BookingStatus, NewBookingParams},
    event_plan::EventPlan,
    party_type::PartyType,
};
use crate::domain::services::booking_service::{place_booking, Placement};
use crate::domain::services::pricing::{advance_payment, plan_total, services_total};
use crate::error::AppError;
use crate::state::AppState;

fn details_path(booking_id: &str) -> String {
    format!("/booking-details/{}/", booking_id)
}

async fn owned_plan(state: &AppState, user_id: &str, plan_id: &str) -> Result<EventPlan, AppError> {
    state.event_plan_repo.find_by_id(user_id, plan_id).await?
        .ok_or(AppError::NotFound("Event plan not found".into()))
}

async fn plan_party_type(state: &AppState, plan: &EventPlan) -> Result<Option<PartyType>, AppError> {
    match &plan.party_type_id {
        Some(id) => state.party_type_repo.find_by_id(id).await,
        None => Ok(None),
    }
}

/// Booking preview for a plan, or a redirect when it is already booked.
pub async fn booking_page(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Path(plan_id): Path<String>,
) -> Result<Response, AppError> {
    let plan = owned_plan(&state, &user.id, &plan_id).await?;

    if let Some(existing) = state.booking_repo.find_by_event_plan(&plan.id).await? {
        return Ok(Redirect::to(&details_path(&existing.id)).into_response());
    }

    let party_type = plan_party_type(&state, &plan).await?;
    let services = state.event_plan_repo.list_services(&plan.id).await?;

    // Priced like the confirm step would charge now; the stored total is left alone.
    let total = plan_total(party_type.as_ref(), &services);

    let mut context = page_context(Some(&user), &cookies);
    context.insert("services_total", &services_total(&services));
    context.insert("total", &total);
    context.insert("advance_payment", &advance_payment(total));
    context.insert("event_plan", &plan);
    context.insert("party_type", &party_type);
    context.insert("services", &services);
    Ok(render(&state, "booking.html", &context)?.into_response())
}

pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Path(plan_id): Path<String>,
) -> Result<Response, AppError> {
    let mut plan = owned_plan(&state, &user.id, &plan_id).await?;

    if let Some(existing) = state.booking_repo.find_by_event_plan(&plan.id).await? {
        return Ok(Redirect::to(&details_path(&existing.id)).into_response());
    }

    let total = state.pricing_service.calculate_total(&mut plan).await?;

    let booking = Booking::new(NewBookingParams {
        user_id: user.id.clone(),
        event_plan_id: plan.id.clone(),
        status: BookingStatus::Confirmed,
        payment_amount: total,
        advance_payment: advance_payment(total),
    });

    let placement = place_booking(state.booking_repo.as_ref(), booking, generate_confirmation_code).await?;
    if let Placement::Created(booking) = &placement {
        info!("Booking {} confirmed for plan {} ({})", booking.id, plan.id, booking.confirmation_code);
        flash::success(&cookies, format!(
            "Booking confirmed! Your confirmation code is {}", booking.confirmation_code
        ));
    }

    Ok(Redirect::to(&details_path(&placement.booking().id)).into_response())
}

pub async fn booking_details(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Path(booking_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let booking = state.booking_repo.find_by_id(&user.id, &booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    let plan = owned_plan(&state, &user.id, &booking.event_plan_id).await?;
    let party_type = plan_party_type(&state, &plan).await?;
    let services = state.event_plan_repo.list_services(&plan.id).await?;

    let mut context = page_context(Some(&user), &cookies);
    context.insert("booking", &booking);
    context.insert("event_plan", &plan);
    context.insert("party_type", &party_type);
    context.insert("services", &services);
    render(&state, "booking_details.html", &context)
}
