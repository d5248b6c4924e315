use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;
use crate::api::extractors::auth::AuthUser;
use crate::api::flash;
use crate::api::forms::{event_plan::EventPlanForm, FormErrors};
use crate::api::render::{page_context, render};
use crate::domain::models::{
    event_plan::{EventPlan, NewEventPlanParams},
    user::User,
};
use crate::domain::services::pricing::plan_total;
use crate::error::AppError;
use crate::state::AppState;

const INVALID_CHOICE: &str = "Select a valid choice. That choice is not one of the available choices.";

pub async fn create_event_plan_page(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
) -> Result<Html<String>, AppError> {
    render_form(&state, &user, &cookies, &EventPlanForm::default(), &FormErrors::new()).await
}

pub async fn create_event_plan(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    cookies: Cookies,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = EventPlanForm::from_pairs(pairs);

    let input = match form.clean() {
        Ok(input) => input,
        Err(errors) => return rejected(&state, &user, &cookies, &form, &errors).await,
    };

    let mut errors = FormErrors::new();
    let party_type = state.party_type_repo.find_by_id(&input.party_type_id).await?;
    if party_type.is_none() {
        errors.add("party_type", INVALID_CHOICE);
    }
    let services = state.service_repo.find_by_ids(&input.service_ids).await?;
    if services.len() != input.service_ids.len() {
        errors.add("services", INVALID_CHOICE);
    }
    if !errors.is_empty() {
        return rejected(&state, &user, &cookies, &form, &errors).await;
    }

    let mut plan = EventPlan::new(NewEventPlanParams {
        user_id: user.id.clone(),
        party_type_id: Some(input.party_type_id),
        guest_count: input.guest_count,
        event_date: input.event_date,
        event_time: input.event_time,
        venue: input.venue,
        special_requests: input.special_requests,
    })?;
    plan.total_cost = plan_total(party_type.as_ref(), &services);

    let service_ids: Vec<String> = services.into_iter().map(|s| s.id).collect();
    let created = state.event_plan_repo.create(&plan, &service_ids).await?;

    info!("Event plan {} created by user {} (total {})", created.id, user.id, created.total_cost);
    flash::success(&cookies, "Event plan created! Proceed to booking.");
    Ok(Redirect::to(&format!("/booking/{}/", created.id)).into_response())
}

async fn rejected(
    state: &AppState,
    user: &User,
    cookies: &Cookies,
    form: &EventPlanForm,
    errors: &FormErrors,
) -> Result<Response, AppError> {
    let page = render_form(state, user, cookies, form, errors).await?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}

async fn render_form(
    state: &AppState,
    user: &User,
    cookies: &Cookies,
    form: &EventPlanForm,
    errors: &FormErrors,
) -> Result<Html<String>, AppError> {
    let party_types = state.party_type_repo.list(None).await?;
    let services = state.service_repo.list().await?;

    let mut context = page_context(Some(user), cookies);
    context.insert("party_types", &party_types);
    context.insert("services", &services);
    context.insert("form", form);
    context.insert("errors", errors);
    render(state, "create_event_plan.html", &context)
}
